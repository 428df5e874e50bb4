//! Template text renderers.

mod simple;

pub use simple::{RenderError, SimpleRenderer};
