//! Error types for manifest-core

use std::path::PathBuf;

/// Result type for manifest-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving manifests.
///
/// Finding nothing is never an error; strategies report it as an empty
/// result. Every variant here aborts the resolution chain.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file could not be parsed
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A `KEY=VALUE` property override without `=` or with an empty key
    #[error("Invalid property override '{input}': expected KEY=VALUE")]
    InvalidProperty { input: String },

    /// I/O failure outside the walker (config reads, base directory lookup)
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from manifest-fs
    #[error(transparent)]
    Fs(#[from] manifest_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
