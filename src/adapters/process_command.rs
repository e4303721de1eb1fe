use std::process::{Child, Command, Stdio};

use tracing::debug;

use crate::domain::{AppError, SpawnSpec};
use crate::ports::{ChildHandle, ProcessSpawner};

/// Starts children through `std::process::Command` with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct CommandSpawner;

impl CommandSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSpawner for CommandSpawner {
    type Child = SpawnedChild;

    fn spawn(&self, spec: &SpawnSpec) -> Result<SpawnedChild, AppError> {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .env_clear()
            .envs(&spec.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!(
            label = %spec.label,
            cwd = %spec.cwd.display(),
            command = %spec.command_line(),
            "spawning"
        );

        let child = command.spawn().map_err(|e| AppError::Spawn {
            label: spec.label.clone(),
            program: spec.program.clone(),
            details: e.to_string(),
        })?;

        Ok(SpawnedChild { label: spec.label.clone(), child })
    }
}

/// A child started by [`CommandSpawner`]. Dropping it neither kills nor reaps the process.
#[derive(Debug)]
pub struct SpawnedChild {
    label: String,
    child: Child,
}

impl ChildHandle for SpawnedChild {
    fn label(&self) -> &str {
        &self.label
    }

    fn id(&self) -> u32 {
        self.child.id()
    }

    fn wait(mut self) -> Result<Option<i32>, AppError> {
        let status = self
            .child
            .wait()
            .map_err(|e| AppError::Wait { label: self.label.clone(), details: e.to_string() })?;
        Ok(status.code())
    }
}
