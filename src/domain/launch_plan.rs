//! Ordered child-process specifications derived from a validated launch.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::environment::{EnvOverlay, EnvSnapshot, join_search_path};
use crate::domain::launch_config::{LaunchConfig, StepConfig};
use crate::domain::repo_set::RepoSet;

/// Everything needed to start one child process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpawnSpec {
    pub label: String,
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub overlay: EnvOverlay,
    /// Complete child environment; never serialized so plans do not leak it.
    #[serde(skip)]
    pub env: BTreeMap<OsString, OsString>,
}

impl SpawnSpec {
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.get(&OsString::from(key)).and_then(|value| value.to_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub root: PathBuf,
    pub search_path: Option<String>,
    pub steps: Vec<SpawnSpec>,
}

impl LaunchPlan {
    /// Turn the configured steps into spawn specs.
    ///
    /// `repos` must come from the same `config`; a step whose repo cannot be
    /// found is reported as a configuration error.
    pub fn build(
        config: &LaunchConfig,
        repos: &RepoSet,
        base_env: &EnvSnapshot,
    ) -> Result<Self, AppError> {
        let search_path = search_path_value(config, repos)?;

        let steps = config
            .steps
            .iter()
            .map(|step| build_step(config, step, repos, base_env, search_path.as_deref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { root: repos.root().to_path_buf(), search_path, steps })
    }

    pub fn step(&self, label: &str) -> Option<&SpawnSpec> {
        self.steps.iter().find(|step| step.label == label)
    }
}

fn search_path_value(config: &LaunchConfig, repos: &RepoSet) -> Result<Option<String>, AppError> {
    if config.search_path.is_empty() {
        return Ok(None);
    }
    let paths = config
        .search_path
        .iter()
        .map(|name| {
            repos.get(name).ok_or_else(|| {
                AppError::invalid_config(format!("search_path references unknown repo '{}'", name))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    join_search_path(&paths).map(Some)
}

fn build_step(
    config: &LaunchConfig,
    step: &StepConfig,
    repos: &RepoSet,
    base_env: &EnvSnapshot,
    search_path: Option<&str>,
) -> Result<SpawnSpec, AppError> {
    let repo_path = repos.get(&step.repo).ok_or_else(|| {
        AppError::invalid_config(format!(
            "step '{}' references unknown repo '{}'",
            step.label, step.repo
        ))
    })?;
    let cwd = match step.subdir.as_deref().filter(|s| !s.is_empty()) {
        Some(subdir) => repo_path.join(subdir),
        None => repo_path.to_path_buf(),
    };

    let mut overlay = EnvOverlay::default();
    for key in &step.env_remove {
        overlay.strip(key.as_str());
    }
    match &step.phase {
        Some(phase) => overlay.insert(config.phase_var.as_str(), phase.as_str()),
        None => overlay.strip(config.phase_var.as_str()),
    }
    if step.search_path
        && let Some(value) = search_path
    {
        overlay.insert(config.search_path_var.as_str(), value);
    }
    for (key, value) in &step.env {
        overlay.insert(key.as_str(), value.as_str());
    }

    let env = base_env.derive(&overlay);
    Ok(SpawnSpec {
        label: step.label.clone(),
        program: step.program.clone(),
        args: step.args.clone(),
        cwd,
        overlay,
        env,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::launch_config::RepoEntry;
    use std::path::Path;

    fn config() -> LaunchConfig {
        toml::from_str(
            r#"
search_path = ["strap", "engine"]

[[repos]]
name = "strap"
path = "."

[[repos]]
name = "engine"
path = "../ice-engine"

[[repos]]
name = "gui"
path = "../ice-studio-gui"

[[steps]]
label = "preboot"
program = "python"
args = ["-m", "engine.preboot.main"]
repo = "strap"
phase = "preboot"
search_path = true
env_remove = ["ICE_RUNTIME_DIR"]

[[steps]]
label = "gui"
program = "npm"
args = ["start"]
repo = "gui"
subdir = "electron"
"#,
        )
        .unwrap()
    }

    fn plan_with(env: EnvSnapshot) -> LaunchPlan {
        let config = config();
        let repos = RepoSet::resolve(Path::new("/work/strap"), &config.repos, None);
        LaunchPlan::build(&config, &repos, &env).unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn preboot_gets_search_path_and_phase() {
        let plan = plan_with(EnvSnapshot::from_pairs([("PATH", "/usr/bin")]));
        let preboot = plan.step("preboot").unwrap();

        assert_eq!(preboot.env_var("PYTHONPATH"), Some("/work/strap:/work/ice-engine"));
        assert_eq!(preboot.env_var("ICE_PHASE"), Some("preboot"));
        assert_eq!(preboot.env_var("PATH"), Some("/usr/bin"));
        assert_eq!(preboot.cwd, PathBuf::from("/work/strap"));
        assert_eq!(preboot.command_line(), "python -m engine.preboot.main");
    }

    #[test]
    fn gui_runs_in_electron_without_phase() {
        let plan = plan_with(EnvSnapshot::from_pairs([("ICE_PHASE", "runtime")]));
        let gui = plan.step("gui").unwrap();

        assert_eq!(gui.cwd, PathBuf::from("/work/ice-studio-gui/electron"));
        assert_eq!(gui.env_var("ICE_PHASE"), None);
        assert_eq!(gui.env_var("PYTHONPATH"), None);
    }

    #[test]
    fn gui_keeps_inherited_search_path_var() {
        let plan = plan_with(EnvSnapshot::from_pairs([("PYTHONPATH", "/inherited")]));
        assert_eq!(plan.step("gui").unwrap().env_var("PYTHONPATH"), Some("/inherited"));
    }

    #[test]
    fn preboot_strips_configured_keys() {
        let plan = plan_with(EnvSnapshot::from_pairs([("ICE_RUNTIME_DIR", "/tmp/old")]));
        assert_eq!(plan.step("preboot").unwrap().env_var("ICE_RUNTIME_DIR"), None);
        assert_eq!(plan.step("gui").unwrap().env_var("ICE_RUNTIME_DIR"), Some("/tmp/old"));
    }

    #[test]
    fn steps_keep_config_order() {
        let plan = plan_with(EnvSnapshot::default());
        let labels: Vec<_> = plan.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["preboot", "gui"]);
    }

    #[test]
    fn extra_env_overrides_derived_values() {
        let mut config = config();
        config.steps[0].env.insert("ICE_PHASE".into(), "custom".into());
        let repos = RepoSet::resolve(Path::new("/work/strap"), &config.repos, None);
        let plan = LaunchPlan::build(&config, &repos, &EnvSnapshot::default()).unwrap();
        assert_eq!(plan.step("preboot").unwrap().env_var("ICE_PHASE"), Some("custom"));
    }

    #[test]
    fn unknown_step_repo_is_a_config_error() {
        let mut config = config();
        config.steps[1].repo = "missing".into();
        let repos = RepoSet::resolve(
            Path::new("/work/strap"),
            &[RepoEntry { name: "strap".into(), path: ".".into(), required: true }],
            None,
        );
        let err = LaunchPlan::build(&config, &repos, &EnvSnapshot::default()).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn serialized_plan_omits_full_environment() {
        let plan = plan_with(EnvSnapshot::from_pairs([("SECRET_TOKEN", "hunter2")]));
        let json = serde_json::to_string(&plan).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("\"label\":\"preboot\""));
    }
}
