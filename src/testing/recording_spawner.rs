use std::sync::Mutex;

use crate::domain::{AppError, SpawnSpec};
use crate::ports::{ChildHandle, ProcessSpawner};

/// Spawner that records every spec instead of starting processes.
#[derive(Default)]
pub struct RecordingSpawner {
    pub spawned: Mutex<Vec<SpawnSpec>>,
    fail_label: Option<String>,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the spawn of `label` fail as if its program were missing.
    pub fn failing_on(label: &str) -> Self {
        Self { spawned: Mutex::new(Vec::new()), fail_label: Some(label.to_string()) }
    }

    pub fn labels(&self) -> Vec<String> {
        self.spawned.lock().unwrap().iter().map(|spec| spec.label.clone()).collect()
    }

    pub fn spec(&self, label: &str) -> Option<SpawnSpec> {
        self.spawned.lock().unwrap().iter().find(|spec| spec.label == label).cloned()
    }
}

impl ProcessSpawner for RecordingSpawner {
    type Child = FakeChild;

    fn spawn(&self, spec: &SpawnSpec) -> Result<FakeChild, AppError> {
        if self.fail_label.as_deref() == Some(spec.label.as_str()) {
            return Err(AppError::Spawn {
                label: spec.label.clone(),
                program: spec.program.clone(),
                details: "No such file or directory (os error 2)".into(),
            });
        }
        let mut spawned = self.spawned.lock().unwrap();
        spawned.push(spec.clone());
        Ok(FakeChild { label: spec.label.clone(), id: 1000 + spawned.len() as u32 })
    }
}

#[derive(Debug)]
pub struct FakeChild {
    label: String,
    id: u32,
}

impl ChildHandle for FakeChild {
    fn label(&self) -> &str {
        &self.label
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn wait(self) -> Result<Option<i32>, AppError> {
        Ok(Some(0))
    }
}
