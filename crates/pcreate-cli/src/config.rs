//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PCREATE_<SECTION>__<KEY>`,
//!    e.g. `PCREATE_DISTRIBUTION__VERSION=1.5dev`
//! 3. Config file: `--config FILE` (must exist) or the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use pcreate_adapters::{BUNDLED_FRAMEWORK_VERSION, PinnedDistribution};
use pcreate_core::domain::FRAMEWORK_DISTRIBUTION;

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Framework distribution whose version feeds the templates.
    pub distribution: DistributionConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            distribution: DistributionConfig {
                name: FRAMEWORK_DISTRIBUTION.into(),
                version: BUNDLED_FRAMEWORK_VERSION.into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, a config file and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the default location is read when present.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let env = Environment::with_prefix("PCREATE")
            .prefix_separator("_")
            .separator("__");

        match config_file {
            Some(path) => Self::from_sources(path, true, Some(env)),
            None => Self::from_sources(&Self::config_path(), false, Some(env)),
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pcreate.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "pcreate", "pcreate")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pcreate.toml"))
    }

    /// The distribution adapter described by this configuration.
    pub fn distribution(&self) -> PinnedDistribution {
        PinnedDistribution::new(&self.distribution.name, &self.distribution.version)
    }

    fn from_sources(path: &Path, required: bool, env: Option<Environment>) -> CliResult<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("distribution.name", defaults.distribution.name)
            .and_then(|b| b.set_default("distribution.version", defaults.distribution.version))
            .and_then(|b| b.set_default("output.no_color", defaults.output.no_color))
            .map_err(config_error)?
            .add_source(File::from(path).format(FileFormat::Toml).required(required));

        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
