//! Parent environment snapshot and per-child overlays.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::AppError;

/// Immutable copy of the launcher's environment, taken once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<OsString, OsString>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self { vars: std::env::vars_os().collect() }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self { vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(key)).map(OsString::as_os_str)
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        self.get("HOME")
            .or_else(|| self.get("USERPROFILE"))
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Build a child environment: the snapshot with `overlay` applied.
    ///
    /// Removals happen before insertions, so a key both removed and set ends
    /// up with the overlay value.
    pub fn derive(&self, overlay: &EnvOverlay) -> BTreeMap<OsString, OsString> {
        let mut env = self.vars.clone();
        for key in &overlay.remove {
            env.remove(OsStr::new(key));
        }
        for (key, value) in &overlay.set {
            env.insert(OsString::from(key), OsString::from(value));
        }
        env
    }
}

/// Keys a single child adds to or strips from the parent environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvOverlay {
    pub set: BTreeMap<String, String>,
    pub remove: Vec<String>,
}

impl EnvOverlay {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set.insert(key.into(), value.into());
    }

    pub fn strip(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.remove.contains(&key) {
            self.remove.push(key);
        }
    }
}

/// Join directories with the platform path-list separator.
pub fn join_search_path(paths: &[&Path]) -> Result<String, AppError> {
    let joined = std::env::join_paths(paths)
        .map_err(|e| AppError::InvalidPath(format!("cannot join search path: {}", e)))?;
    joined.into_string().map_err(|raw| {
        let lossy = raw.to_string_lossy();
        AppError::InvalidPath(format!("search path is not valid unicode: {}", lossy))
    })
}
