//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `pcreate-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Scaffold`: a pluggable generator
//!   - `ScaffoldCatalog`: the available generators
//!   - `Distribution`: framework version lookup
//!   - `OutputSink`: status and listing lines
//!   - `Filesystem`: file operations for template scaffolds
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `CreateService::run`

pub mod output;

pub use output::{Distribution, Filesystem, OutputSink, Scaffold, ScaffoldCatalog};

#[cfg(test)]
pub use output::{MockDistribution, MockOutputSink};
