use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static PROFILES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/profiles");

pub const DEFAULT_PROFILE: &str = "strap";

/// Names of the embedded launch profiles, sorted.
pub fn list_profiles() -> Vec<String> {
    let mut names: Vec<String> = PROFILES_DIR
        .files()
        .filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
        .filter_map(|file| file.path().file_stem().map(|s| s.to_string_lossy().to_string()))
        .collect();
    names.sort();
    names
}

/// TOML source of the embedded profile `name`.
pub fn profile_source(name: &str) -> Result<&'static str, AppError> {
    PROFILES_DIR
        .get_file(format!("{}.toml", name))
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::UnknownProfile {
            name: name.to_string(),
            available: list_profiles().join(", "),
        })
}
