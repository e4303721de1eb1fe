//! The launch sequence: validate every repository, then start each step.

use tracing::info;

use super::prepare::{LaunchSettings, prepare};
use crate::app::AppContext;
use crate::domain::{AppError, LaunchPlan};
use crate::ports::{ChildHandle, ConfigSource, ProcessSpawner, ToolLocator};

#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    pub launch: LaunchSettings,
    /// Print the plan instead of spawning anything.
    pub dry_run: bool,
    /// Stay alive as the children's parent until they all exit.
    pub attach: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedStep {
    pub label: String,
    pub pid: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitedStep {
    pub label: String,
    pub code: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct StartOutcome {
    pub plan: LaunchPlan,
    pub started: Vec<StartedStep>,
    /// Only filled when attached.
    pub exited: Vec<ExitedStep>,
}

pub fn execute<S, C, T>(
    ctx: &AppContext<S, C, T>,
    options: &StartOptions,
) -> Result<StartOutcome, AppError>
where
    S: ProcessSpawner,
    C: ConfigSource,
    T: ToolLocator,
{
    let prepared = prepare(ctx, &options.launch)?;
    prepared.repos.validate()?;

    let plan = LaunchPlan::build(&prepared.loaded.config, &prepared.repos, ctx.env())?;
    // Nothing may start while a later step would fail for lack of a directory.
    if let Some(spec) = plan.steps.iter().find(|spec| !spec.cwd.is_dir()) {
        return Err(AppError::MissingWorkingDirectory {
            label: spec.label.clone(),
            path: spec.cwd.clone(),
        });
    }
    if options.dry_run {
        return Ok(StartOutcome { plan, started: Vec::new(), exited: Vec::new() });
    }

    let mut children = Vec::with_capacity(plan.steps.len());
    let mut started = Vec::with_capacity(plan.steps.len());
    for spec in &plan.steps {
        println!("[ICE-STRAP] starting {}", spec.label);
        let child = ctx.spawner().spawn(spec)?;
        info!(label = %spec.label, pid = child.id(), "started");
        started.push(StartedStep { label: spec.label.clone(), pid: child.id() });
        children.push(child);
    }

    let mut exited = Vec::new();
    if options.attach {
        for child in children {
            let label = child.label().to_string();
            let code = child.wait()?;
            info!(label = %label, code = ?code, "exited");
            exited.push(ExitedStep { label, code });
        }
    }

    Ok(StartOutcome { plan, started, exited })
}
