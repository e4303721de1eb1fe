//! Layered launch configuration loading.
//!
//! Layers are applied in order, later ones winning:
//! - embedded profile
//! - user file (`~/.config/ice_studio/launch.toml`)
//! - workspace file (`<root>/.ice_studio/launch.toml`)
//! - explicit `--config` file

mod load_config;
mod merge;

pub use load_config::{ConfigRequest, LoadedConfig, load_config, user_layer, workspace_layer};
pub use merge::deep_merge;
