use crate::domain::{AppError, SpawnSpec};

/// Port for starting child processes.
///
/// `spawn` returns as soon as the child exists; it never waits for it.
pub trait ProcessSpawner {
    type Child: ChildHandle;

    /// Start the process described by `spec` with inherited stdio.
    fn spawn(&self, spec: &SpawnSpec) -> Result<Self::Child, AppError>;
}

/// A started child process.
pub trait ChildHandle {
    fn label(&self) -> &str;

    /// Operating-system process id.
    fn id(&self) -> u32;

    /// Block until the child exits; `None` when it was ended by a signal.
    fn wait(self) -> Result<Option<i32>, AppError>;
}
