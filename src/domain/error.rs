use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for ice-strap operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required sibling repository is not present on disk.
    #[error("missing repo: {name} ({})", .path.display())]
    MissingRepository { name: String, path: PathBuf },

    /// A step's working directory is not present on disk.
    #[error("missing working directory for {label}: {}", .path.display())]
    MissingWorkingDirectory { label: String, path: PathBuf },

    /// Requested launch profile is not one of the built-in profiles.
    #[error("Unknown profile '{name}'. Available: {available}")]
    UnknownProfile { name: String, available: String },

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigFileMissing(PathBuf),

    /// Launch configuration is structurally valid TOML but semantically wrong.
    #[error("Invalid launch config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error in {origin}: {details}")]
    TomlParse { origin: String, details: String },

    /// Path cannot be expressed for the child process.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The operating system refused to start a child process.
    #[error("Failed to start {label} ('{program}'): {details}")]
    Spawn { label: String, program: String, details: String },

    /// Waiting on an attached child failed.
    #[error("Failed to wait for {label}: {details}")]
    Wait { label: String, details: String },

    /// Plan serialization error.
    #[error("Failed to serialize plan: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingRepository { .. }
            | AppError::MissingWorkingDirectory { .. }
            | AppError::ConfigFileMissing(_) => io::ErrorKind::NotFound,
            AppError::UnknownProfile { .. }
            | AppError::InvalidConfig(_)
            | AppError::TomlParse { .. }
            | AppError::InvalidPath(_) => io::ErrorKind::InvalidInput,
            AppError::Spawn { .. } | AppError::Wait { .. } | AppError::Serialization(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
