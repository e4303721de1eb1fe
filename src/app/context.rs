use std::path::{Path, PathBuf};

use crate::domain::EnvSnapshot;
use crate::ports::{ConfigSource, ProcessSpawner, ToolLocator};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ProcessSpawner, C: ConfigSource, T: ToolLocator> {
    root: PathBuf,
    env: EnvSnapshot,
    spawner: S,
    config_source: C,
    tools: T,
}

impl<S: ProcessSpawner, C: ConfigSource, T: ToolLocator> AppContext<S, C, T> {
    /// Create a new application context.
    pub fn new(root: PathBuf, env: EnvSnapshot, spawner: S, config_source: C, tools: T) -> Self {
        Self { root, env, spawner, config_source, tools }
    }

    /// Directory every repository offset is resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parent environment captured at startup.
    pub fn env(&self) -> &EnvSnapshot {
        &self.env
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    pub fn config_source(&self) -> &C {
        &self.config_source
    }

    pub fn tools(&self) -> &T {
        &self.tools
    }
}
