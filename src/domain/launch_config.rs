//! Launch configuration domain models.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Repositories and process steps for one launch, merged from all config layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchConfig {
    /// Environment variable that receives the joined search path.
    #[serde(default = "default_search_path_var")]
    pub search_path_var: String,
    /// Environment variable that carries the phase marker.
    #[serde(default = "default_phase_var")]
    pub phase_var: String,
    /// Repository names joined, in order, into the search path.
    #[serde(default)]
    pub search_path: Vec<String>,
    /// Repositories that must be resolved before anything starts.
    #[serde(default)]
    pub repos: Vec<RepoEntry>,
    /// Processes started in order once every required repository exists.
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// A named repository offset relative to the launch root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepoEntry {
    pub name: String,
    pub path: String,
    #[serde(default = "default_true")]
    pub required: bool,
}

/// One child process of the launch sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    pub label: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Repository whose directory becomes the working directory.
    pub repo: String,
    /// Optional subdirectory of `repo`.
    #[serde(default)]
    pub subdir: Option<String>,
    /// Phase marker value; steps without one never see the phase variable.
    #[serde(default)]
    pub phase: Option<String>,
    /// Whether the child receives the search-path variable.
    #[serde(default)]
    pub search_path: bool,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default)]
    pub env_remove: Vec<String>,
}

impl LaunchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_var_name("search_path_var", &self.search_path_var)?;
        validate_var_name("phase_var", &self.phase_var)?;

        if self.repos.is_empty() {
            return Err(AppError::invalid_config("at least one repo must be declared"));
        }
        if self.steps.is_empty() {
            return Err(AppError::invalid_config("at least one step must be declared"));
        }

        let mut repo_names = HashSet::new();
        for repo in &self.repos {
            if repo.name.trim().is_empty() {
                return Err(AppError::invalid_config("repo name must not be empty"));
            }
            if repo.path.trim().is_empty() {
                return Err(AppError::invalid_config(format!(
                    "repo '{}' path must not be empty",
                    repo.name
                )));
            }
            if !repo_names.insert(repo.name.as_str()) {
                return Err(AppError::invalid_config(format!("duplicate repo '{}'", repo.name)));
            }
        }

        for name in &self.search_path {
            if !repo_names.contains(name.as_str()) {
                return Err(AppError::invalid_config(format!(
                    "search_path references unknown repo '{}'",
                    name
                )));
            }
        }

        let mut labels = HashSet::new();
        for step in &self.steps {
            step.validate(&repo_names)?;
            if !labels.insert(step.label.as_str()) {
                return Err(AppError::invalid_config(format!("duplicate step '{}'", step.label)));
            }
        }

        Ok(())
    }

    pub fn repo(&self, name: &str) -> Option<&RepoEntry> {
        self.repos.iter().find(|repo| repo.name == name)
    }
}

impl StepConfig {
    fn validate(&self, repo_names: &HashSet<&str>) -> Result<(), AppError> {
        if self.label.trim().is_empty() {
            return Err(AppError::invalid_config("step label must not be empty"));
        }
        if self.program.trim().is_empty() {
            return Err(AppError::invalid_config(format!(
                "step '{}' program must not be empty",
                self.label
            )));
        }
        if !repo_names.contains(self.repo.as_str()) {
            return Err(AppError::invalid_config(format!(
                "step '{}' references unknown repo '{}'",
                self.label, self.repo
            )));
        }
        if matches!(&self.phase, Some(phase) if phase.trim().is_empty()) {
            return Err(AppError::invalid_config(format!(
                "step '{}' phase must not be empty",
                self.label
            )));
        }
        for key in self.env.keys().chain(self.env_remove.iter()) {
            validate_var_name(&format!("step '{}' env", self.label), key)?;
        }
        Ok(())
    }
}

fn validate_var_name(what: &str, name: &str) -> Result<(), AppError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(AppError::invalid_config(format!(
            "{} has invalid variable name '{}'",
            what, name
        )));
    }
    Ok(())
}

fn default_search_path_var() -> String {
    "PYTHONPATH".to_string()
}

fn default_phase_var() -> String {
    "ICE_PHASE".to_string()
}

fn default_true() -> bool {
    true
}
