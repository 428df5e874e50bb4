//! A single parsed request to the scaffold generator.

/// Immutable, parsed command request.
///
/// Built once by the front-end (or a test) and handed to the create service
/// and, unchanged, to every scaffold that renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    scaffolds: Vec<String>,
    list: bool,
    project: Option<String>,
    simulate: bool,
    overwrite: bool,
    ignore_conflicting_name: bool,
}

impl Invocation {
    pub fn builder() -> InvocationBuilder {
        InvocationBuilder::default()
    }

    /// Requested scaffold names in request order. Duplicates are preserved.
    pub fn scaffolds(&self) -> &[String] {
        &self.scaffolds
    }

    pub fn wants_list(&self) -> bool {
        self.list
    }

    /// The positional project name or path, if one was given.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Scaffolds should report what they would write without writing it.
    pub fn simulate(&self) -> bool {
        self.simulate
    }

    /// Scaffolds may replace existing files whose content differs.
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn ignore_conflicting_name(&self) -> bool {
        self.ignore_conflicting_name
    }
}

/// Builder for [`Invocation`].
#[derive(Debug, Default)]
pub struct InvocationBuilder {
    inner: Invocation,
}

impl InvocationBuilder {
    pub fn scaffold(mut self, name: impl Into<String>) -> Self {
        self.inner.scaffolds.push(name.into());
        self
    }

    pub fn scaffolds<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.scaffolds.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn list(mut self, list: bool) -> Self {
        self.inner.list = list;
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.inner.project = Some(project.into());
        self
    }

    pub fn maybe_project(mut self, project: Option<String>) -> Self {
        self.inner.project = project;
        self
    }

    pub fn simulate(mut self, simulate: bool) -> Self {
        self.inner.simulate = simulate;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.inner.overwrite = overwrite;
        self
    }

    pub fn ignore_conflicting_name(mut self, ignore: bool) -> Self {
        self.inner.ignore_conflicting_name = ignore;
        self
    }

    pub fn build(self) -> Invocation {
        self.inner
    }
}
