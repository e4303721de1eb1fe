//! Resolution and validation of the sibling repositories a launch depends on.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::launch_config::RepoEntry;

/// A repository offset resolved against the launch root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRepo {
    pub name: String,
    pub path: PathBuf,
    pub required: bool,
}

impl ResolvedRepo {
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }
}

/// Named repository paths computed once per launch.
///
/// Declaration order is kept: validation reports the first missing entry in
/// that order and search paths are joined in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSet {
    root: PathBuf,
    repos: Vec<ResolvedRepo>,
}

impl RepoSet {
    /// Resolve every entry against `root` without touching the filesystem.
    ///
    /// Relative offsets are joined onto the root and normalised lexically,
    /// absolute offsets are kept, and a leading `~/` is expanded against
    /// `home` when one is known.
    pub fn resolve(root: &Path, entries: &[RepoEntry], home: Option<&Path>) -> Self {
        let root = normalize_lexically(root);
        let repos = entries
            .iter()
            .map(|entry| ResolvedRepo {
                name: entry.name.clone(),
                path: resolve_offset(&root, &entry.path, home),
                required: entry.required,
            })
            .collect();
        Self { root, repos }
    }

    /// Fail on the first required repository that is not a directory.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.missing().into_iter().find(|repo| repo.required) {
            Some(repo) => Err(AppError::MissingRepository {
                name: repo.name.clone(),
                path: repo.path.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Every repository (required or not) that is absent, in declaration order.
    pub fn missing(&self) -> Vec<&ResolvedRepo> {
        self.repos.iter().filter(|repo| !repo.exists()).collect()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.repos.iter().find(|repo| repo.name == name).map(|repo| repo.path.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedRepo> {
        self.repos.iter()
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

fn resolve_offset(root: &Path, offset: &str, home: Option<&Path>) -> PathBuf {
    if let Some(home) = home {
        if offset == "~" {
            return normalize_lexically(home);
        }
        if let Some(rest) = offset.strip_prefix("~/") {
            return normalize_lexically(&home.join(rest));
        }
    }
    normalize_lexically(&root.join(offset))
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// `..` directly under the root stays at the root; leading `..` of a relative
/// path are preserved.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
