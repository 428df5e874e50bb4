// ============================================================================
// domain/error.rs - USAGE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a usage error: the request as given cannot be rendered.
/// The create service reports these on the output sink and exits with
/// status 2 rather than propagating them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("You must provide at least one scaffold name")]
    MissingScaffoldName,

    #[error("You must provide a project name")]
    MissingProjectName,

    /// Names are unique and sorted.
    #[error("Unavailable scaffolds: {}", .names.join(", "))]
    UnavailableScaffolds { names: Vec<String> },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error(
        "Project name \"{name}\" conflicts with the installed \"{distribution}\" distribution"
    )]
    ConflictingProjectName { name: String, distribution: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingScaffoldName => vec![
                "Pick a scaffold with -s/--scaffold <name>".into(),
                "Try: pcreate --list to see available scaffolds".into(),
            ],
            Self::MissingProjectName => vec![
                "Pass the project name or path as the last argument".into(),
                "Example: pcreate -s starter MyProject".into(),
            ],
            Self::UnavailableScaffolds { names } => vec![
                format!("Unknown scaffold(s): {}", names.join(", ")),
                "Try: pcreate --list to see available scaffolds".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use a directory name such as MyProject or ../work/MyProject".into(),
            ],
            Self::ConflictingProjectName { .. } => vec![
                "Choose a different project name".into(),
                "Or pass --ignore-conflicting-name to proceed anyway".into(),
            ],
        }
    }
}
