//! Resolve a launch into its plan without starting anything.

use serde::Serialize;

use super::prepare::{LaunchSettings, prepare};
use crate::app::AppContext;
use crate::domain::{AppError, LaunchPlan, ResolvedRepo};
use crate::ports::{ConfigSource, ProcessSpawner, ToolLocator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlanFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub layers: Vec<String>,
    pub repos: Vec<ResolvedRepo>,
    #[serde(flatten)]
    pub plan: LaunchPlan,
}

impl PlanReport {
    pub fn render(&self, format: PlanFormat) -> Result<String, AppError> {
        match format {
            PlanFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            PlanFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("root: {}\n", self.plan.root.display()));
        out.push_str(&format!("layers: {}\n", self.layers.join(", ")));
        out.push_str("repos:\n");
        for repo in &self.repos {
            let flag = if repo.required { "" } else { " (optional)" };
            out.push_str(&format!("  {} = {}{}\n", repo.name, repo.path.display(), flag));
        }
        if let Some(search_path) = &self.plan.search_path {
            out.push_str(&format!("search path: {}\n", search_path));
        }
        out.push_str("steps:\n");
        for (index, step) in self.plan.steps.iter().enumerate() {
            out.push_str(&format!("  {}. {}: {}\n", index + 1, step.label, step.command_line()));
            out.push_str(&format!("     cwd: {}\n", step.cwd.display()));
            for (key, value) in &step.overlay.set {
                out.push_str(&format!("     set {}={}\n", key, value));
            }
            for key in &step.overlay.remove {
                if !step.overlay.set.contains_key(key) {
                    out.push_str(&format!("     unset {}\n", key));
                }
            }
        }
        out
    }
}

/// Build the plan after the same validation `start` performs.
pub fn execute<S, C, T>(
    ctx: &AppContext<S, C, T>,
    launch: &LaunchSettings,
) -> Result<PlanReport, AppError>
where
    S: ProcessSpawner,
    C: ConfigSource,
    T: ToolLocator,
{
    let prepared = prepare(ctx, launch)?;
    prepared.repos.validate()?;
    let plan = LaunchPlan::build(&prepared.loaded.config, &prepared.repos, ctx.env())?;

    Ok(PlanReport {
        layers: prepared.loaded.layers,
        repos: prepared.repos.iter().cloned().collect(),
        plan,
    })
}
