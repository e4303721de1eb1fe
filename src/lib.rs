//! ice-strap: validate sibling ICE repositories and launch the preboot runtime and studio GUI.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::{CommandSpawner, FilesystemConfigSource, PathToolLocator};
use app::AppContext;
use app::commands::{check, plan, start};

pub use adapters::profile_assets::{DEFAULT_PROFILE, list_profiles};
pub use app::commands::LaunchSettings;
pub use app::commands::check::{CheckOptions, CheckOutcome};
pub use app::commands::plan::{PlanFormat, PlanReport};
pub use app::commands::start::{ExitedStep, StartOptions, StartOutcome, StartedStep};
pub use domain::{AppError, EnvSnapshot, LaunchConfig, LaunchPlan, RepoSet, SpawnSpec};

type SystemContext = AppContext<CommandSpawner, FilesystemConfigSource, PathToolLocator>;

/// Build a context over the real process table, filesystem and `PATH`.
///
/// `root` defaults to the current directory; a relative root is taken
/// relative to it. The environment is captured once here.
fn system_context(root: Option<PathBuf>) -> Result<SystemContext, AppError> {
    let cwd = std::env::current_dir()?;
    let root = match root {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd,
    };
    Ok(AppContext::new(
        root,
        EnvSnapshot::capture(),
        CommandSpawner::new(),
        FilesystemConfigSource::new(),
        PathToolLocator::new(),
    ))
}

// =============================================================================
// Launch API
// =============================================================================

/// Validate every required repository, then start each configured step.
///
/// Children inherit the terminal and are not waited for unless
/// `options.attach` is set. Nothing is spawned when a repository is missing.
pub fn start(root: Option<PathBuf>, options: &StartOptions) -> Result<StartOutcome, AppError> {
    let ctx = system_context(root)?;
    start::execute(&ctx, options)
}

/// Report every missing repository, program and working directory.
pub fn check(root: Option<PathBuf>, options: &CheckOptions) -> Result<CheckOutcome, AppError> {
    let ctx = system_context(root)?;
    check::execute(&ctx, options)
}

/// Resolve and validate a launch, returning the plan `start` would execute.
pub fn plan(root: Option<PathBuf>, launch: &LaunchSettings) -> Result<PlanReport, AppError> {
    let ctx = system_context(root)?;
    plan::execute(&ctx, launch)
}
