//! Scaffold catalogs.

mod memory;

pub use memory::InMemoryCatalog;
