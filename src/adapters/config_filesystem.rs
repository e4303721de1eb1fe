use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigSource;

/// Reads configuration layers from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FilesystemConfigSource;

impl FilesystemConfigSource {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSource for FilesystemConfigSource {
    fn read_layer(&self, path: &Path) -> Result<Option<String>, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Io(err)),
        }
    }
}
