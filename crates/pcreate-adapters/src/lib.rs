//! Infrastructure adapters for pcreate.
//!
//! This crate implements the ports defined in `pcreate-core::application::ports`.
//! It contains all I/O: the local filesystem, the built-in template
//! scaffolds and the catalog that serves them.

pub mod builtin_scaffolds;
pub mod catalog;
pub mod distribution;
pub mod filesystem;
pub mod renderer;
pub mod scaffold;
pub mod sink;

// Re-export commonly used adapters
pub use catalog::InMemoryCatalog;
pub use distribution::{BUNDLED_FRAMEWORK_VERSION, PinnedDistribution};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use scaffold::TemplateScaffold;
pub use sink::MemorySink;
