//! Framework distribution adapters.

use pcreate_core::{
    application::{ApplicationError, ports::Distribution},
    domain::FRAMEWORK_DISTRIBUTION,
    error::PcreateResult,
};
use tracing::debug;

/// Framework release the bundled scaffolds were written against.
pub const BUNDLED_FRAMEWORK_VERSION: &str = "1.9.4";

/// A distribution whose version is fixed up front, usually from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedDistribution {
    name: String,
    version: String,
}

impl PinnedDistribution {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for PinnedDistribution {
    fn default() -> Self {
        Self::new(FRAMEWORK_DISTRIBUTION, BUNDLED_FRAMEWORK_VERSION)
    }
}

impl Distribution for PinnedDistribution {
    fn name(&self) -> &str {
        &self.name
    }

    /// The configured version, verbatim. A blank value is a lookup failure.
    fn version(&self) -> PcreateResult<String> {
        if self.version.trim().is_empty() {
            return Err(ApplicationError::DistributionLookup {
                reason: format!("no version configured for distribution '{}'", self.name),
            }
            .into());
        }

        debug!(distribution = %self.name, version = %self.version, "Using pinned version");
        Ok(self.version.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bundled_release() {
        let dist = PinnedDistribution::default();
        assert_eq!(dist.name(), "pyramid");
        assert_eq!(dist.version().unwrap(), BUNDLED_FRAMEWORK_VERSION);
    }

    #[test]
    fn version_is_reported_verbatim() {
        let dist = PinnedDistribution::new("pyramid", " 1.5dev");
        assert_eq!(dist.version().unwrap(), " 1.5dev");
    }

    #[test]
    fn name_is_configurable() {
        assert_eq!(PinnedDistribution::new("flask", "2.0").name(), "flask");
    }

    #[test]
    fn empty_version_is_lookup_failure() {
        let err = PinnedDistribution::new("pyramid", "  ").version().unwrap_err();
        assert!(err.to_string().contains("no version configured"));
    }
}
