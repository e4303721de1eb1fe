mod fake_tool_locator;
mod memory_config_source;
mod recording_spawner;

pub use fake_tool_locator::FakeToolLocator;
pub use memory_config_source::MemoryConfigSource;
pub use recording_spawner::RecordingSpawner;
