//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render these scaffolds" or "list scaffolds".

pub mod create_service;

pub use create_service::{CreateService, ExitStatus, ScaffoldInfo};
