//! Template-driven scaffold.
//!
//! A [`TemplateScaffold`] is a named list of template entries. Running it
//! renders every entry's path and content with the invocation's variables,
//! then writes the results below the output directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pcreate_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, Scaffold},
    },
    domain::{Invocation, TemplateVars},
    error::PcreateResult,
};
use tracing::{debug, info, instrument, warn};

use crate::renderer::{RenderError, SimpleRenderer};

/// One file in a template scaffold, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// `/`-separated path with `+var+` segments.
    pub path: String,
    /// File body with `{{var}}` placeholders.
    pub content: String,
}

/// A rendered file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Scaffold that renders a fixed set of template entries.
pub struct TemplateScaffold {
    name: String,
    summary: String,
    entries: Vec<TemplateEntry>,
    filesystem: Arc<dyn Filesystem>,
    renderer: SimpleRenderer,
}

impl TemplateScaffold {
    pub fn new(
        name: impl Into<String>,
        summary: impl Into<String>,
        filesystem: Arc<dyn Filesystem>,
    ) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            entries: Vec::new(),
            filesystem,
            renderer: SimpleRenderer::new(),
        }
    }

    /// Add a template entry.
    pub fn with_entry(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.entries.push(TemplateEntry {
            path: path.into(),
            content: content.into(),
        });
        self
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Render every entry without touching the filesystem.
    pub fn plan(&self, vars: &TemplateVars) -> Result<Vec<RenderedFile>, RenderError> {
        self.entries
            .iter()
            .map(|entry| {
                Ok(RenderedFile {
                    path: self.renderer.render_path(&entry.path, vars)?,
                    content: self.renderer.render_content(&entry.content, vars)?,
                })
            })
            .collect()
    }

    fn write(&self, file: &RenderedFile, output_dir: &Path, overwrite: bool) -> PcreateResult<()> {
        let target = output_dir.join(&file.path);

        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        match self.filesystem.read_file(&target)? {
            Some(existing) if existing == file.content => {
                debug!(path = %target.display(), "Unchanged, skipping");
                return Ok(());
            }
            Some(_) if !overwrite => {
                warn!(path = %target.display(), "Exists with different content, skipping");
                return Ok(());
            }
            Some(_) => info!(path = %target.display(), "Overwriting"),
            None => info!(path = %target.display(), "Creating"),
        }

        self.filesystem.write_file(&target, &file.content)
    }
}

impl Scaffold for TemplateScaffold {
    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.summary
    }

    #[instrument(skip_all, fields(scaffold = %self.name, output_dir = %output_dir.display()))]
    fn run(
        &self,
        invocation: &Invocation,
        output_dir: &Path,
        vars: &TemplateVars,
    ) -> PcreateResult<()> {
        let files = self
            .plan(vars)
            .map_err(|e| ApplicationError::RenderingFailed {
                scaffold: self.name.clone(),
                reason: e.to_string(),
            })?;

        if invocation.simulate() {
            for file in &files {
                info!(path = %output_dir.join(&file.path).display(), "Would create");
            }
            return Ok(());
        }

        self.filesystem.create_dir_all(output_dir)?;
        for file in &files {
            self.write(file, output_dir, invocation.overwrite())?;
        }

        debug!(files = files.len(), "Scaffold written");
        Ok(())
    }
}
