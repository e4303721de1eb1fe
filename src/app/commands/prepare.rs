//! Shared front half of every command: load the config and resolve repositories.

use std::path::PathBuf;

use tracing::debug;

use crate::adapters::profile_assets::DEFAULT_PROFILE;
use crate::app::AppContext;
use crate::app::config::{ConfigRequest, LoadedConfig, load_config};
use crate::domain::{AppError, RepoSet};
use crate::ports::{ConfigSource, ProcessSpawner, ToolLocator};

/// Which configuration to launch with.
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub profile: String,
    pub config: Option<PathBuf>,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self { profile: DEFAULT_PROFILE.to_string(), config: None }
    }
}

pub struct Prepared {
    pub loaded: LoadedConfig,
    pub repos: RepoSet,
}

pub fn prepare<S, C, T>(
    ctx: &AppContext<S, C, T>,
    settings: &LaunchSettings,
) -> Result<Prepared, AppError>
where
    S: ProcessSpawner,
    C: ConfigSource,
    T: ToolLocator,
{
    let home = ctx.env().home_dir();
    let request = ConfigRequest {
        profile: &settings.profile,
        root: ctx.root(),
        home: home.as_deref(),
        explicit: settings.config.as_deref(),
    };
    let loaded = load_config(ctx.config_source(), &request)?;

    let repos = RepoSet::resolve(ctx.root(), &loaded.config.repos, home.as_deref());
    for repo in repos.iter() {
        let path = repo.path.display();
        debug!(name = %repo.name, path = %path, required = repo.required, "resolved repo");
    }

    Ok(Prepared { loaded, repos })
}
