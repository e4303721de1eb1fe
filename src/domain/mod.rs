pub mod environment;
pub mod error;
pub mod launch_config;
pub mod launch_plan;
pub mod repo_set;

pub use environment::{EnvOverlay, EnvSnapshot, join_search_path};
pub use error::AppError;
pub use launch_config::{LaunchConfig, RepoEntry, StepConfig};
pub use launch_plan::{LaunchPlan, SpawnSpec};
pub use repo_set::{RepoSet, ResolvedRepo};
