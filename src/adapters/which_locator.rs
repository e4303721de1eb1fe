use std::path::PathBuf;

use crate::ports::ToolLocator;

/// Looks programs up on `PATH` the way a shell would.
#[derive(Debug, Clone, Default)]
pub struct PathToolLocator;

impl PathToolLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathToolLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}
