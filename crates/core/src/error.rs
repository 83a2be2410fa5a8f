use std::path::PathBuf;

use thiserror::Error;

/// Error type for snapshot assembly and persistence.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Filesystem fault while deleting, creating or writing `path`.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file extension is neither JSON nor YAML.
    #[error("Unsupported config format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedConfigFormat(PathBuf),

    /// A source file name would resolve outside of its contract folder.
    #[error("Refusing to write source file {file:?} of contract {contract}: path escapes the code directory")]
    UnsafeSourcePath { contract: String, file: String },

    /// A resolved contract name would place its folder outside `.code`.
    #[error("Refusing to use contract name {name:?} for {address}: path escapes the code directory")]
    UnsafeContractName { address: String, name: String },

    /// The project name is not a single plain folder name under `discovery/`.
    #[error("Refusing to use project name {0:?}: must be a single folder name")]
    UnsafeProjectName(String),
}

impl DiscoveryError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiscoveryError::Io { path: path.into(), source }
    }
}

/// Convenience result type for discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
