use std::path::PathBuf;

/// Port for finding executables the launch depends on.
pub trait ToolLocator {
    fn locate(&self, program: &str) -> Option<PathBuf>;
}
