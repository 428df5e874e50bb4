//! Simple variable substitution renderer.
//!
//! File contents use `{{name}}` placeholders (surrounding whitespace inside
//! the braces is ignored). Path segments use `+name+`, and a trailing
//! `_tmpl` suffix is stripped from the final file name.

use std::path::PathBuf;

use pcreate_core::domain::TemplateVars;
use thiserror::Error;
use tracing::instrument;

/// Suffix marking a file as a template; removed from the rendered name.
pub const TEMPLATE_SUFFIX: &str = "_tmpl";

/// Errors raised while substituting variables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown template variable '{name}'")]
    UnknownVariable { name: String },

    #[error("template path '{path}' renders to an empty segment")]
    EmptySegment { path: String },
}

/// Simple renderer using basic variable substitution.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }

    /// Substitute every `{{name}}` placeholder in `source`.
    ///
    /// An opening `{{` without a matching `}}` is copied verbatim.
    #[instrument(skip_all)]
    pub fn render_content(&self, source: &str, vars: &TemplateVars) -> Result<String, RenderError> {
        substitute(source, "{{", "}}", vars)
    }

    /// Render a `/`-separated template path into a relative path.
    pub fn render_path(
        &self,
        template_path: &str,
        vars: &TemplateVars,
    ) -> Result<PathBuf, RenderError> {
        let mut rendered = PathBuf::new();
        let mut segments = template_path.split('/').filter(|s| !s.is_empty()).peekable();

        while let Some(segment) = segments.next() {
            let mut name = substitute(segment, "+", "+", vars)?;
            if segments.peek().is_none() {
                if let Some(stripped) = name.strip_suffix(TEMPLATE_SUFFIX) {
                    name = stripped.to_owned();
                }
            }
            if name.is_empty() {
                return Err(RenderError::EmptySegment {
                    path: template_path.to_owned(),
                });
            }
            rendered.push(name);
        }

        Ok(rendered)
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn substitute(
    input: &str,
    open: &str,
    close: &str,
    vars: &TemplateVars,
) -> Result<String, RenderError> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(open) {
        let after = &rest[start + open.len()..];
        let Some(end) = after.find(close) else {
            break;
        };

        let name = after[..end].trim();
        let value = vars.get(name).ok_or_else(|| RenderError::UnknownVariable {
            name: name.to_owned(),
        })?;

        out.push_str(&rest[..start]);
        out.push_str(value);
        rest = &after[end + close.len()..];
    }

    out.push_str(rest);
    Ok(out)
}
