//! Launch configuration loading from embedded profiles and config files.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::debug;

use super::merge::deep_merge;
use crate::adapters::profile_assets;
use crate::domain::{AppError, LaunchConfig};
use crate::ports::ConfigSource;

const LAYER_DIR: &str = ".ice_studio";
const LAYER_FILE: &str = "launch.toml";

/// Inputs that select and locate the configuration layers.
#[derive(Debug, Clone)]
pub struct ConfigRequest<'a> {
    pub profile: &'a str,
    pub root: &'a Path,
    pub home: Option<&'a Path>,
    pub explicit: Option<&'a Path>,
}

/// A validated configuration and the layers that produced it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: LaunchConfig,
    pub layers: Vec<String>,
}

pub fn user_layer(home: &Path) -> PathBuf {
    home.join(".config").join("ice_studio").join(LAYER_FILE)
}

pub fn workspace_layer(root: &Path) -> PathBuf {
    root.join(LAYER_DIR).join(LAYER_FILE)
}

/// Load, merge and validate every layer for `request`.
pub fn load_config<C: ConfigSource>(
    source: &C,
    request: &ConfigRequest<'_>,
) -> Result<LoadedConfig, AppError> {
    let origin = format!("profile '{}'", request.profile);
    let mut merged = parse_table(profile_assets::profile_source(request.profile)?, &origin)?;
    let mut layers = vec![origin];

    let mut optional = Vec::new();
    if let Some(home) = request.home {
        optional.push(user_layer(home));
    }
    optional.push(workspace_layer(request.root));

    for path in optional {
        match source.read_layer(&path)? {
            Some(content) => {
                let origin = path.display().to_string();
                merged = deep_merge(merged, parse_table(&content, &origin)?);
                debug!(layer = %origin, "applied config layer");
                layers.push(origin);
            }
            None => debug!(layer = %path.display(), "config layer not present"),
        }
    }

    if let Some(path) = request.explicit {
        let content =
            source.read_layer(path)?.ok_or_else(|| AppError::ConfigFileMissing(path.into()))?;
        let origin = path.display().to_string();
        merged = deep_merge(merged, parse_table(&content, &origin)?);
        debug!(layer = %origin, "applied explicit config");
        layers.push(origin);
    }

    let config: LaunchConfig = Value::Table(merged).try_into().map_err(|e: toml::de::Error| {
        AppError::TomlParse { origin: layers.join(" + "), details: e.message().to_string() }
    })?;
    config.validate()?;

    Ok(LoadedConfig { config, layers })
}

fn parse_table(content: &str, origin: &str) -> Result<Table, AppError> {
    content.parse::<Table>().map_err(|e| AppError::TomlParse {
        origin: origin.to_string(),
        details: e.message().to_string(),
    })
}
