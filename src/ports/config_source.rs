use std::path::Path;

use crate::domain::AppError;

/// Port for reading launch configuration layers.
pub trait ConfigSource {
    /// Read the layer at `path`, or `None` when it does not exist.
    fn read_layer(&self, path: &Path) -> Result<Option<String>, AppError>;
}
