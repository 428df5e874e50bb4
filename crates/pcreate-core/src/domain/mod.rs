//! Core domain layer for pcreate.
//!
//! This module contains pure request logic with ZERO external dependencies
//! beyond `thiserror`. Scaffold rendering, catalog lookups and console output
//! are reached through ports defined in the application layer.
//!
//! ## What lives here
//!
//! - **Invocation**: the parsed request (scaffold names, project, flags)
//! - **ProjectTarget**: project name + absolute output directory
//! - **FrameworkVersion / DocsBranch**: total version classification
//! - **TemplateVars**: the five substitution variables
//! - **DomainValidator**: usage checks, in order
//!
//! Nothing in this module performs I/O.

pub mod error;
pub mod invocation;
pub mod project;
pub mod vars;
pub mod version;

mod validation;

// Re-exports for convenience
pub use error::DomainError;
pub use invocation::{Invocation, InvocationBuilder};
pub use project::{ProjectTarget, normalize};
pub use validation::{DomainValidator, FRAMEWORK_DISTRIBUTION};
pub use vars::TemplateVars;
pub use version::{DocsBranch, FrameworkVersion};
