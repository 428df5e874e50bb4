//! pcreate Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `pcreate`
//! scaffold generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pcreate-cli (CLI)             │
//! │     (Builds an Invocation, maps exit)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (CreateService)             │
//! │   list → validate → derive → render     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Scaffold, Catalog, Distribution, Sink) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pcreate-adapters (Infrastructure)    │
//! │ (InMemoryCatalog, TemplateScaffold, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Invocation, ProjectTarget, Vars, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pcreate_core::{application::CreateService, domain::Invocation};
//!
//! let invocation = Invocation::builder()
//!     .scaffold("starter")
//!     .project("MyProject")
//!     .build();
//!
//! // Adapters are injected; see pcreate-adapters for implementations.
//! let service = CreateService::new(catalog, distribution, sink, std::env::current_dir()?);
//! let status = service.run(&invocation)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreateService, ExitStatus,
        ports::{Distribution, Filesystem, OutputSink, Scaffold, ScaffoldCatalog},
    };
    pub use crate::domain::{
        DocsBranch, FrameworkVersion, Invocation, InvocationBuilder, ProjectTarget, TemplateVars,
    };
    pub use crate::error::{PcreateError, PcreateResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
