pub mod config_filesystem;
pub mod process_command;
pub mod profile_assets;
pub mod which_locator;

pub use config_filesystem::FilesystemConfigSource;
pub use process_command::{CommandSpawner, SpawnedChild};
pub use which_locator::PathToolLocator;
