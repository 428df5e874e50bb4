//! Create Service - main application orchestrator.
//!
//! This service runs one invocation of the scaffold generator:
//! 1. List scaffolds (short-circuits everything else)
//! 2. Validate the request (usage errors end here with status 2)
//! 3. Derive the project target and template variables
//! 4. Run every requested scaffold in request order
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Distribution, OutputSink, ScaffoldCatalog},
    },
    domain::{
        DomainValidator as validator, FrameworkVersion, Invocation, ProjectTarget, TemplateVars,
    },
    error::PcreateResult,
};

/// Outcome of a completed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Listing shown or every scaffold rendered.
    Success,
    /// The request was rejected; the reason was written to the output sink.
    Usage,
}

impl ExitStatus {
    /// Process exit code for this status.
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Usage => 2,
        }
    }
}

/// Information about a scaffold for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldInfo {
    pub name: String,
    pub summary: String,
}

/// Main create service.
///
/// Owns its ports. The working directory is fixed at construction so that
/// relative project names resolve the same way for the whole invocation.
pub struct CreateService {
    catalog: Box<dyn ScaffoldCatalog>,
    distribution: Box<dyn Distribution>,
    sink: Box<dyn OutputSink>,
    working_dir: PathBuf,
}

impl CreateService {
    /// Create a new service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pcreate_core::application::CreateService;
    ///
    /// let service = CreateService::new(
    ///     catalog,      // impl ScaffoldCatalog
    ///     distribution, // impl Distribution
    ///     sink,         // impl OutputSink
    ///     std::env::current_dir()?,
    /// );
    /// ```
    pub fn new(
        catalog: Box<dyn ScaffoldCatalog>,
        distribution: Box<dyn Distribution>,
        sink: Box<dyn OutputSink>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            distribution,
            sink,
            working_dir: working_dir.into(),
        }
    }

    /// Run one invocation.
    ///
    /// Usage errors are reported on the output sink and yield
    /// [`ExitStatus::Usage`]. Errors from the catalog, the distribution or a
    /// scaffold's own `run` are returned as `Err`; a failing scaffold aborts
    /// the scaffolds after it and leaves earlier output in place.
    #[instrument(
        skip_all,
        fields(scaffolds = ?invocation.scaffolds(), project = ?invocation.project())
    )]
    pub fn run(&self, invocation: &Invocation) -> PcreateResult<ExitStatus> {
        if invocation.wants_list() {
            return self.show_scaffolds();
        }

        let scaffolds = self.catalog.list()?;
        let available = scaffolds.iter().map(|s| s.name());
        let distribution = self.distribution.name();

        let target = match validator::validate_request(
            invocation,
            available,
            distribution,
            &self.working_dir,
        ) {
            Ok(target) => target,
            Err(e) => {
                warn!(error = %e, "Request rejected");
                self.sink.emit(&e.to_string())?;
                return Ok(ExitStatus::Usage);
            }
        };

        let vars = self.variables_for(&target)?;
        self.render_scaffolds(invocation, target.output_dir(), &vars)?;

        info!(project = %target.name(), "All scaffolds rendered");
        Ok(ExitStatus::Success)
    }

    /// List all available scaffolds, ordered by name.
    pub fn list_scaffolds(&self) -> PcreateResult<Vec<ScaffoldInfo>> {
        Ok(self
            .catalog
            .list()?
            .iter()
            .map(|s| ScaffoldInfo {
                name: s.name().to_owned(),
                summary: s.summary().to_owned(),
            })
            .collect())
    }

    /// Derive the template variables for a resolved target.
    pub fn variables_for(&self, target: &ProjectTarget) -> PcreateResult<TemplateVars> {
        let version = FrameworkVersion::parse(self.distribution.version()?);
        debug!(
            version = %version.as_str(),
            docs_branch = %version.docs_branch(),
            "Framework version classified"
        );
        Ok(TemplateVars::derive(target, &version))
    }

    /// The directory relative project names resolve against.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn show_scaffolds(&self) -> PcreateResult<ExitStatus> {
        let scaffolds = self.list_scaffolds()?;

        if scaffolds.is_empty() {
            self.sink.emit("No scaffolds available")?;
            return Ok(ExitStatus::Success);
        }

        let width = scaffolds.iter().map(|s| s.name.len()).max().unwrap_or(0);
        self.sink.emit("Available scaffolds:")?;
        for scaffold in &scaffolds {
            let padding = " ".repeat(width - scaffold.name.len());
            self.sink
                .emit(&format!("  {}:{}  {}", scaffold.name, padding, scaffold.summary))?;
        }

        Ok(ExitStatus::Success)
    }

    /// Each name is looked up again so a scaffold removed from the catalog
    /// after validation surfaces as `ScaffoldNotFound`.
    fn render_scaffolds(
        &self,
        invocation: &Invocation,
        output_dir: &Path,
        vars: &TemplateVars,
    ) -> PcreateResult<()> {
        for name in invocation.scaffolds() {
            let scaffold = self
                .catalog
                .get(name)?
                .ok_or_else(|| ApplicationError::ScaffoldNotFound { name: name.clone() })?;

            info!(scaffold = %name, output_dir = %output_dir.display(), "Rendering scaffold");
            scaffold.run(invocation, output_dir, vars)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::{MockDistribution, MockOutputSink, Scaffold};
    use crate::domain::FRAMEWORK_DISTRIBUTION;
    use crate::error::PcreateError;

    struct Recording {
        name: &'static str,
        calls: Mutex<Vec<(PathBuf, TemplateVars)>>,
    }

    impl Recording {
        fn new(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(PathBuf, TemplateVars)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Scaffold for Recording {
        fn name(&self) -> &str {
            self.name
        }

        fn summary(&self) -> &str {
            "records calls"
        }

        fn run(&self, _: &Invocation, output_dir: &Path, vars: &TemplateVars) -> PcreateResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push((output_dir.to_path_buf(), vars.clone()));
            Ok(())
        }
    }

    struct Catalog(Vec<Arc<dyn Scaffold>>);

    impl ScaffoldCatalog for Catalog {
        fn list(&self) -> PcreateResult<Vec<Arc<dyn Scaffold>>> {
            Ok(self.0.clone())
        }

        fn get(&self, name: &str) -> PcreateResult<Option<Arc<dyn Scaffold>>> {
            Ok(self.0.iter().find(|s| s.name() == name).cloned())
        }
    }

    fn dist(version: &'static str) -> Box<MockDistribution> {
        let mut dist = MockDistribution::new();
        dist.expect_name().return_const(FRAMEWORK_DISTRIBUTION.to_owned());
        dist.expect_version().returning(move || Ok(version.to_owned()));
        Box::new(dist)
    }

    fn silent_sink() -> Box<MockOutputSink> {
        let mut sink = MockOutputSink::new();
        sink.expect_emit().never();
        Box::new(sink)
    }

    #[test]
    fn empty_listing_emits_single_line() {
        let mut sink = MockOutputSink::new();
        sink.expect_emit()
            .with(eq("No scaffolds available"))
            .times(1)
            .returning(|_| Ok(()));

        let catalog = Box::new(Catalog(vec![]));
        let service = CreateService::new(catalog, dist("0.1"), Box::new(sink), "/w");
        let status = service.run(&Invocation::builder().list(true).build()).unwrap();
        assert_eq!(status, ExitStatus::Success);
    }

    #[test]
    fn listing_pads_names() {
        let lines = Arc::new(Mutex::new(Vec::<String>::new()));
        let captured = Arc::clone(&lines);
        let mut sink = MockOutputSink::new();
        sink.expect_emit().returning(move |line| {
            captured.lock().unwrap().push(line.to_owned());
            Ok(())
        });

        let catalog = Catalog(vec![Recording::new("a"), Recording::new("long")]);
        let service = CreateService::new(Box::new(catalog), dist("0.1"), Box::new(sink), "/w");
        service.run(&Invocation::builder().list(true).build()).unwrap();

        assert_eq!(
            *lines.lock().unwrap(),
            vec![
                "Available scaffolds:".to_owned(),
                "  a:     records calls".to_owned(),
                "  long:  records calls".to_owned(),
            ]
        );
    }

    #[test]
    fn usage_error_is_written_not_returned() {
        let mut sink = MockOutputSink::new();
        sink.expect_emit()
            .withf(|line| line.starts_with("You must provide a project name"))
            .times(1)
            .returning(|_| Ok(()));

        let catalog = Catalog(vec![Recording::new("dummy")]);
        let service = CreateService::new(Box::new(catalog), dist("0.1"), Box::new(sink), "/w");
        let status = service
            .run(&Invocation::builder().scaffold("dummy").build())
            .unwrap();
        assert_eq!(status.code(), 2);
    }

    #[test]
    fn distribution_is_not_consulted_on_usage_error() {
        let mut dist = MockDistribution::new();
        dist.expect_name().return_const(FRAMEWORK_DISTRIBUTION.to_owned());
        dist.expect_version().never();
        let mut sink = MockOutputSink::new();
        sink.expect_emit().times(1).returning(|_| Ok(()));

        let catalog = Box::new(Catalog(vec![]));
        let service = CreateService::new(catalog, Box::new(dist), Box::new(sink), "/w");
        let status = service.run(&Invocation::default()).unwrap();
        assert_eq!(status, ExitStatus::Usage);
    }

    #[test]
    fn renders_with_derived_vars() {
        let dummy = Recording::new("dummy");
        let catalog = Catalog(vec![dummy.clone()]);
        let service =
            CreateService::new(Box::new(catalog), dist("0.10.1dev"), silent_sink(), "/w");

        let status = service
            .run(&Invocation::builder().scaffold("dummy").project("Distro").build())
            .unwrap();
        assert_eq!(status, ExitStatus::Success);

        let calls = dummy.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from("/w/Distro"));
        assert_eq!(calls[0].1.pyramid_version(), "0.10.1dev");
        assert_eq!(calls[0].1.pyramid_docs_branch(), "master");
    }

    #[test]
    fn distribution_failure_propagates() {
        let mut dist = MockDistribution::new();
        dist.expect_name().return_const(FRAMEWORK_DISTRIBUTION.to_owned());
        dist.expect_version().returning(|| {
            Err(ApplicationError::DistributionLookup {
                reason: "not installed".into(),
            }
            .into())
        });
        let dummy = Recording::new("dummy");
        let catalog = Catalog(vec![dummy.clone()]);
        let service = CreateService::new(Box::new(catalog), Box::new(dist), silent_sink(), "/w");

        let err = service
            .run(&Invocation::builder().scaffold("dummy").project("Distro").build())
            .unwrap_err();
        assert!(matches!(
            err,
            PcreateError::Application(ApplicationError::DistributionLookup { .. })
        ));
        assert!(dummy.calls().is_empty());
    }

    /// Lists a scaffold but no longer resolves it by name.
    struct VanishingCatalog(Arc<dyn Scaffold>);

    impl ScaffoldCatalog for VanishingCatalog {
        fn list(&self) -> PcreateResult<Vec<Arc<dyn Scaffold>>> {
            Ok(vec![Arc::clone(&self.0)])
        }

        fn get(&self, _: &str) -> PcreateResult<Option<Arc<dyn Scaffold>>> {
            Ok(None)
        }
    }

    #[test]
    fn scaffold_removed_after_validation_is_not_found() {
        let dummy = Recording::new("dummy");
        let catalog = VanishingCatalog(dummy.clone());
        let service = CreateService::new(Box::new(catalog), dist("1.0"), silent_sink(), "/w");

        let err = service
            .run(&Invocation::builder().scaffold("dummy").project("Distro").build())
            .unwrap_err();
        match err {
            PcreateError::Application(ApplicationError::ScaffoldNotFound { name }) => {
                assert_eq!(name, "dummy")
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(dummy.calls().is_empty());
    }

    #[test]
    fn reserved_name_comes_from_distribution() {
        let mut dist = MockDistribution::new();
        dist.expect_name().return_const("flask".to_owned());
        dist.expect_version().never();
        let mut sink = MockOutputSink::new();
        sink.expect_emit()
            .withf(|line| line.contains("conflicts with the installed \"flask\" distribution"))
            .times(1)
            .returning(|_| Ok(()));

        let catalog = Catalog(vec![Recording::new("dummy")]);
        let service = CreateService::new(Box::new(catalog), Box::new(dist), Box::new(sink), "/w");
        let status = service
            .run(&Invocation::builder().scaffold("dummy").project("Flask").build())
            .unwrap();
        assert_eq!(status, ExitStatus::Usage);
    }
}
