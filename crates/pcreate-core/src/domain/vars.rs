//! Template substitution variables handed to every scaffold.

use std::collections::BTreeMap;

use crate::domain::{project::ProjectTarget, version::FrameworkVersion};

pub const PROJECT: &str = "project";
pub const EGG: &str = "egg";
pub const PACKAGE: &str = "package";
pub const PYRAMID_VERSION: &str = "pyramid_version";
pub const PYRAMID_DOCS_BRANCH: &str = "pyramid_docs_branch";

/// The five substitution variables of one render.
///
/// Every key is always present; the set is fixed by the type rather than by
/// convention on a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    project: String,
    egg: String,
    package: String,
    pyramid_version: String,
    pyramid_docs_branch: String,
}

impl TemplateVars {
    pub const KEYS: [&'static str; 5] =
        [PROJECT, EGG, PACKAGE, PYRAMID_VERSION, PYRAMID_DOCS_BRANCH];

    pub fn derive(target: &ProjectTarget, version: &FrameworkVersion) -> Self {
        let project = target.name().to_owned();
        let egg = egg_name(&project);
        let package = egg.to_lowercase();

        Self {
            project,
            egg,
            package,
            pyramid_version: version.as_str().to_owned(),
            pyramid_docs_branch: version.docs_branch().to_string(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn egg(&self) -> &str {
        &self.egg
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn pyramid_version(&self) -> &str {
        &self.pyramid_version
    }

    pub fn pyramid_docs_branch(&self) -> &str {
        &self.pyramid_docs_branch
    }

    /// Look a variable up by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            PROJECT => Some(&self.project),
            EGG => Some(&self.egg),
            PACKAGE => Some(&self.package),
            PYRAMID_VERSION => Some(&self.pyramid_version),
            PYRAMID_DOCS_BRANCH => Some(&self.pyramid_docs_branch),
            _ => None,
        }
    }

    /// Key/value pairs in [`Self::KEYS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Self::KEYS.into_iter().filter_map(|key| self.get(key).map(|v| (key, v)))
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}

/// Egg name: every hyphen becomes an underscore.
pub fn egg_name(project: &str) -> String {
    project.replace('-', "_")
}
