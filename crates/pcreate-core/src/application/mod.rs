//! Application layer for pcreate.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CreateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or validation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CreateService,
    ExitStatus,
    ScaffoldInfo, // DTO for scaffold listing
};

// Re-export port traits (for adapter implementation)
pub use ports::{Distribution, Filesystem, OutputSink, Scaffold, ScaffoldCatalog};

pub use error::ApplicationError;
