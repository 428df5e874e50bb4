//! Scaffold implementations.

mod template;

pub use template::{RenderedFile, TemplateEntry, TemplateScaffold};
