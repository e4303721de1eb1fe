//! Shared testing harness for `ice-strap` integration tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Isolated sibling-repository layout: `<parent>/strap` is the launch root.
pub(crate) struct TestContext {
    temp: TempDir,
    parent: PathBuf,
    home: PathBuf,
}

impl TestContext {
    /// Create a layout containing only the launch root.
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory for tests");
        let parent = temp.path().canonicalize().expect("Failed to canonicalize temp directory");
        temp.child("strap").create_dir_all().expect("Failed to create launch root");
        temp.child("home").create_dir_all().expect("Failed to create home directory");
        let home = parent.join("home");
        Self { temp, parent, home }
    }

    /// Create a layout where every repository of the `engine` profile exists.
    pub(crate) fn with_engine_layout() -> Self {
        let ctx = Self::new();
        ctx.create_sibling("ice-engine");
        ctx.create_sibling("ice-studio-gui/electron");
        ctx
    }

    pub(crate) fn root(&self) -> PathBuf {
        self.parent.join("strap")
    }

    pub(crate) fn sibling(&self, name: &str) -> PathBuf {
        self.parent.join(name)
    }

    pub(crate) fn home(&self) -> &Path {
        &self.home
    }

    pub(crate) fn create_sibling(&self, name: &str) {
        self.temp.child(name).create_dir_all().expect("Failed to create sibling repository");
    }

    /// Write `<root>/.ice_studio/launch.toml`.
    pub(crate) fn write_workspace_config(&self, content: &str) {
        let dir = self.root().join(".ice_studio");
        fs::create_dir_all(&dir).expect("Failed to create .ice_studio");
        fs::write(dir.join("launch.toml"), content).expect("Failed to write launch.toml");
    }

    /// Build a command for the compiled binary running inside the launch root.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ice-strap").expect("Failed to locate ice-strap binary");
        cmd.current_dir(self.root())
            .env("HOME", self.home())
            .env_remove("ICE_STRAP_PROFILE")
            .env_remove("ICE_STRAP_LOG")
            .env_remove("ICE_PHASE")
            .env_remove("PYTHONPATH");
        cmd
    }

    /// Poll for a file written by a detached child.
    pub(crate) fn wait_for_file(&self, path: &Path, timeout: Duration) -> Option<String> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(content) = fs::read_to_string(path)
                && !content.is_empty()
            {
                return Some(content);
            }
            thread::sleep(Duration::from_millis(50));
        }
        None
    }

    /// Poll until `path` exists, whatever its content.
    pub(crate) fn wait_for_file_presence(&self, path: &Path, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if path.exists() {
                return true;
            }
            thread::sleep(Duration::from_millis(50));
        }
        false
    }
}
