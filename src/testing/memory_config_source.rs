use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigSource;

/// In-memory config layers keyed by path.
#[derive(Default)]
pub struct MemoryConfigSource {
    files: HashMap<PathBuf, String>,
}

impl MemoryConfigSource {
    pub fn with(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl ConfigSource for MemoryConfigSource {
    fn read_layer(&self, path: &Path) -> Result<Option<String>, AppError> {
        Ok(self.files.get(path).cloned())
    }
}
