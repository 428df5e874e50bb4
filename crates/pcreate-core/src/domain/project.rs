//! Project target resolution: turn the positional argument into a project
//! name and an absolute output directory.

use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// Where a project is rendered and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    name: String,
    output_dir: PathBuf,
}

impl ProjectTarget {
    /// Resolve a project name or path against `cwd`.
    ///
    /// A single trailing separator is ignored. Absolute arguments are only
    /// normalised; relative ones are joined onto `cwd` first. The project
    /// name is the final component of the resulting directory.
    pub fn resolve(arg: &str, cwd: &Path) -> Result<Self, DomainError> {
        let trimmed = strip_trailing_separator(arg);
        if trimmed.is_empty() {
            return Err(invalid(arg, "no final path component"));
        }

        let raw = Path::new(trimmed);
        let output_dir = if raw.is_absolute() {
            normalize(raw)
        } else {
            normalize(&cwd.join(raw))
        };

        let name = match output_dir.file_name() {
            Some(name) => name
                .to_str()
                .ok_or_else(|| invalid(arg, "name is not valid UTF-8"))?
                .to_owned(),
            None => return Err(invalid(arg, "no final path component")),
        };

        Ok(Self { name, output_dir })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn invalid(arg: &str, reason: &str) -> DomainError {
    DomainError::InvalidProjectName {
        name: arg.to_owned(),
        reason: reason.to_owned(),
    }
}

fn strip_trailing_separator(arg: &str) -> &str {
    match arg.chars().last() {
        Some(c) if std::path::is_separator(c) => &arg[..arg.len() - c.len_utf8()],
        _ => arg,
    }
}

/// Lexical normalisation: drops `.` and folds `..` into its parent.
///
/// Does not touch the filesystem, so symlinks are not resolved. `..` never
/// climbs above the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
