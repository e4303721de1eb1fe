//! Pre-flight inspection of a launch without starting anything.

mod diagnostics;

use super::prepare::{LaunchSettings, prepare};
use crate::app::AppContext;
use crate::domain::{AppError, LaunchPlan};
use crate::ports::{ConfigSource, ProcessSpawner, ToolLocator};

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub launch: LaunchSettings,
    /// Treat warnings as failures.
    pub strict: bool,
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub diagnostics: Diagnostics,
    pub layers: Vec<String>,
    pub exit_code: i32,
}

/// Report every problem that would stop or degrade a launch.
///
/// Unlike `start`, all repositories are scanned rather than stopping at the
/// first missing one.
pub fn execute<S, C, T>(
    ctx: &AppContext<S, C, T>,
    options: &CheckOptions,
) -> Result<CheckOutcome, AppError>
where
    S: ProcessSpawner,
    C: ConfigSource,
    T: ToolLocator,
{
    let prepared = prepare(ctx, &options.launch)?;
    let mut diagnostics = Diagnostics::default();

    for repo in prepared.repos.missing() {
        let message = format!("missing repo ({})", repo.path.display());
        if repo.required {
            diagnostics.push_error(&repo.name, message);
        } else {
            diagnostics.push_warning(&repo.name, message);
        }
    }

    match LaunchPlan::build(&prepared.loaded.config, &prepared.repos, ctx.env()) {
        Ok(plan) => {
            for spec in &plan.steps {
                if ctx.tools().locate(&spec.program).is_none() {
                    let message = format!("program '{}' not found on PATH", spec.program);
                    diagnostics.push_error(&spec.label, message);
                }
                if !spec.cwd.is_dir() {
                    let cwd = spec.cwd.display();
                    let message = format!("working directory {} does not exist", cwd);
                    diagnostics.push_error(&spec.label, message);
                }
            }
        }
        // Steps cannot be inspected without a plan.
        Err(err) => diagnostics.push_error("plan", err.to_string()),
    }

    diagnostics.emit();
    let exit_code = diagnostics.exit_code(options.strict);

    Ok(CheckOutcome { diagnostics, layers: prepared.loaded.layers, exit_code })
}
