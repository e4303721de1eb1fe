use std::collections::HashSet;
use std::path::PathBuf;

use crate::ports::ToolLocator;

/// Tool locator that only knows the programs it was given.
#[derive(Default)]
pub struct FakeToolLocator {
    installed: HashSet<String>,
}

impl FakeToolLocator {
    pub fn with_tools(tools: &[&str]) -> Self {
        Self { installed: tools.iter().map(|t| t.to_string()).collect() }
    }
}

impl ToolLocator for FakeToolLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.installed.contains(program).then(|| PathBuf::from("/usr/bin").join(program))
    }
}
