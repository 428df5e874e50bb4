//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pcreate-adapters` crate provides implementations.

use std::path::Path;
use std::sync::Arc;

use crate::domain::{Invocation, TemplateVars};
use crate::error::PcreateResult;

/// A named project generator.
///
/// Implemented by:
/// - `pcreate_adapters::scaffold::TemplateScaffold` (built-in templates)
///
/// `run` receives the invocation unchanged so a scaffold can honour
/// `simulate` and `overwrite`. Creating `output_dir` is the scaffold's job.
pub trait Scaffold: Send + Sync {
    /// Unique name used with `--scaffold`.
    fn name(&self) -> &str;

    /// One-line description shown by `--list`.
    fn summary(&self) -> &str;

    /// Render this scaffold into `output_dir`.
    fn run(
        &self,
        invocation: &Invocation,
        output_dir: &Path,
        vars: &TemplateVars,
    ) -> PcreateResult<()>;
}

/// Port for the set of available scaffolds.
///
/// Implemented by:
/// - `pcreate_adapters::catalog::InMemoryCatalog`
pub trait ScaffoldCatalog: Send + Sync {
    /// All scaffolds, ordered by name.
    fn list(&self) -> PcreateResult<Vec<Arc<dyn Scaffold>>>;

    /// Look a scaffold up by name at render time.
    fn get(&self, name: &str) -> PcreateResult<Option<Arc<dyn Scaffold>>>;
}

/// Port for the framework distribution whose version goes into the
/// template variables. Its name is reserved: no project may be called that.
///
/// Implemented by:
/// - `pcreate_adapters::distribution::PinnedDistribution`
#[cfg_attr(test, mockall::automock)]
pub trait Distribution: Send + Sync {
    /// Distribution name, e.g. `pyramid`.
    fn name(&self) -> &str;

    fn version(&self) -> PcreateResult<String>;
}

/// Port for human-readable status and listing lines.
///
/// Implemented by:
/// - `pcreate_adapters::sink::MemorySink` (testing)
/// - the CLI's `OutputManager` (terminal)
#[cfg_attr(test, mockall::automock)]
pub trait OutputSink: Send + Sync {
    fn emit(&self, line: &str) -> PcreateResult<()>;
}

/// Port for filesystem operations used by template scaffolds.
///
/// Implemented by:
/// - `pcreate_adapters::filesystem::LocalFilesystem` (production)
/// - `pcreate_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PcreateResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> PcreateResult<()>;

    /// Read a file's content; `None` if it does not exist.
    fn read_file(&self, path: &Path) -> PcreateResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
