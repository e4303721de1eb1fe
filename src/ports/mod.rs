mod config_source;
mod process_spawner;
mod tool_locator;

pub use config_source::ConfigSource;
pub use process_spawner::{ChildHandle, ProcessSpawner};
pub use tool_locator::ToolLocator;
