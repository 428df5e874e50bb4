use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::{error::DomainError, invocation::Invocation, project::ProjectTarget};

/// Default framework distribution name.
pub const FRAMEWORK_DISTRIBUTION: &str = "pyramid";

/// Centralized domain validation.
///
/// Checks run in a fixed order and the first failure wins: scaffold names,
/// project argument, scaffold availability, then the project name itself.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a render request against the names of the available scaffolds.
    ///
    /// `distribution` is the framework distribution a project must not
    /// shadow. On success returns the resolved project target.
    pub fn validate_request<'a>(
        invocation: &Invocation,
        available: impl IntoIterator<Item = &'a str>,
        distribution: &str,
        cwd: &Path,
    ) -> Result<ProjectTarget, DomainError> {
        if invocation.scaffolds().is_empty() {
            return Err(DomainError::MissingScaffoldName);
        }

        let project = match invocation.project() {
            Some(project) if !project.is_empty() => project,
            _ => return Err(DomainError::MissingProjectName),
        };

        Self::validate_scaffold_names(invocation.scaffolds(), available)?;

        let target = ProjectTarget::resolve(project, cwd)?;
        if !invocation.ignore_conflicting_name() {
            Self::validate_project_name(target.name(), distribution)?;
        }
        Ok(target)
    }

    /// Every requested name must be available. Missing names are reported
    /// once each, sorted.
    pub fn validate_scaffold_names<'a>(
        requested: &[String],
        available: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), DomainError> {
        let available: BTreeSet<&str> = available.into_iter().collect();
        let missing: BTreeSet<&str> = requested
            .iter()
            .map(String::as_str)
            .filter(|name| !available.contains(name))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::UnavailableScaffolds {
                names: missing.into_iter().map(str::to_owned).collect(),
            })
        }
    }

    /// The project name must not equal the distribution name, ignoring case.
    pub fn validate_project_name(name: &str, distribution: &str) -> Result<(), DomainError> {
        if name.eq_ignore_ascii_case(distribution) {
            return Err(DomainError::ConflictingProjectName {
                name: name.to_owned(),
                distribution: distribution.to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CWD: &str = "/work";

    fn validate(inv: &Invocation, available: &[&str]) -> Result<ProjectTarget, DomainError> {
        let available = available.iter().copied();
        DomainValidator::validate_request(inv, available, FRAMEWORK_DISTRIBUTION, Path::new(CWD))
    }

    #[test]
    fn scaffold_name_is_checked_first() {
        let inv = Invocation::builder().build();
        assert_eq!(validate(&inv, &["dummy"]), Err(DomainError::MissingScaffoldName));
    }

    #[test]
    fn project_is_required() {
        let inv = Invocation::builder().scaffold("dummy").build();
        assert_eq!(validate(&inv, &["dummy"]), Err(DomainError::MissingProjectName));
    }

    #[test]
    fn empty_project_counts_as_missing() {
        let inv = Invocation::builder().scaffold("dummy").project("").build();
        assert_eq!(validate(&inv, &["dummy"]), Err(DomainError::MissingProjectName));
    }

    #[test]
    fn unknown_names_are_deduplicated_and_sorted() {
        let inv = Invocation::builder()
            .scaffolds(["zeta", "dummy", "alpha", "zeta"])
            .project("Distro")
            .build();
        assert_eq!(
            validate(&inv, &["dummy"]),
            Err(DomainError::UnavailableScaffolds {
                names: vec!["alpha".into(), "zeta".into()]
            })
        );
    }

    #[test]
    fn framework_name_is_reserved() {
        let inv = Invocation::builder().scaffold("dummy").project("Pyramid").build();
        assert!(matches!(
            validate(&inv, &["dummy"]),
            Err(DomainError::ConflictingProjectName { .. })
        ));
    }

    #[test]
    fn reserved_name_can_be_forced() {
        let inv = Invocation::builder()
            .scaffold("dummy")
            .project("pyramid")
            .ignore_conflicting_name(true)
            .build();
        assert_eq!(validate(&inv, &["dummy"]).unwrap().name(), "pyramid");
    }

    #[test]
    fn valid_request_resolves_target() {
        let inv = Invocation::builder().scaffold("dummy").project("Distro").build();
        let target = validate(&inv, &["dummy"]).unwrap();
        assert_eq!(target.output_dir(), Path::new("/work/Distro"));
    }

    #[test]
    fn reserved_name_follows_distribution() {
        let inv = Invocation::builder().scaffold("dummy").project("flask").build();
        let err = DomainValidator::validate_request(&inv, ["dummy"], "Flask", Path::new(CWD));
        assert_eq!(
            err,
            Err(DomainError::ConflictingProjectName {
                name: "flask".into(),
                distribution: "Flask".into()
            })
        );

        let inv = Invocation::builder().scaffold("dummy").project("pyramid").build();
        let target = DomainValidator::validate_request(&inv, ["dummy"], "Flask", Path::new(CWD));
        assert!(target.is_ok());
    }
}
