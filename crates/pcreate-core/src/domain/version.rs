//! Framework version classification and the documentation branch derived
//! from it.
//!
//! Classification is total: every version string maps to a [`DocsBranch`],
//! unparsable input included.

use std::fmt;

/// A framework version string together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkVersion {
    raw: String,
    branch: DocsBranch,
}

/// Documentation branch matching a framework version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsBranch {
    /// Clean `MAJOR.MINOR[.PATCH...]` release: `<MAJOR>.<MINOR>-branch`.
    Release { major: String, minor: String },
    /// Development or pre-release build: `master`.
    Development,
    /// Major/minor could not be read: `latest`.
    Unparsable,
}

impl FrameworkVersion {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let branch = DocsBranch::classify(&raw);
        Self { raw, branch }
    }

    /// The version exactly as the distribution reported it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn docs_branch(&self) -> &DocsBranch {
        &self.branch
    }
}

impl DocsBranch {
    pub fn classify(version: &str) -> Self {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() < 2 {
            return Self::Unparsable;
        }

        let major = parts[0];
        let minor = parts[1];
        if !is_numeric(major) || !minor.starts_with(|c: char| c.is_ascii_digit()) {
            return Self::Unparsable;
        }

        // A suffix on the minor or any later component marks a dev build,
        // e.g. `0.12dev` or `0.10.1dev`.
        if parts[1..].iter().any(|part| !is_numeric(part)) {
            return Self::Development;
        }

        Self::Release {
            major: major.to_owned(),
            minor: minor.to_owned(),
        }
    }
}

impl fmt::Display for DocsBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release { major, minor } => write!(f, "{major}.{minor}-branch"),
            Self::Development => f.write_str("master"),
            Self::Unparsable => f.write_str("latest"),
        }
    }
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}
