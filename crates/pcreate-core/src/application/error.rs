//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the adapters the
//! application calls, not usage mistakes. Usage errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A scaffold failed while rendering.
    #[error("Scaffold '{scaffold}' failed to render: {reason}")]
    RenderingFailed { scaffold: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The framework distribution version could not be determined.
    #[error("Could not determine the framework version: {reason}")]
    DistributionLookup { reason: String },

    /// A shared adapter lock was poisoned by a panicking thread.
    #[error("Internal lock poisoned: {resource}")]
    LockPoisoned { resource: &'static str },

    /// A scaffold disappeared from the catalog between validation and rendering.
    #[error("Scaffold not found: {name}")]
    ScaffoldNotFound { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { scaffold, .. } => vec![
                format!("The '{}' scaffold could not finish", scaffold),
                "Files written before the failure are left in place".into(),
                "Try again with --simulate to preview the output".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::DistributionLookup { .. } => vec![
                "Set the framework version in the config file".into(),
                "Or export PCREATE_DISTRIBUTION__VERSION".into(),
            ],
            Self::ScaffoldNotFound { .. } => {
                vec!["Try: pcreate --list to see available scaffolds".into()]
            }
            Self::LockPoisoned { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::LockPoisoned { .. } => ErrorCategory::Internal,
            Self::DistributionLookup { .. } => ErrorCategory::Configuration,
            Self::ScaffoldNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
