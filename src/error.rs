//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for catalog-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in the binary and tool handlers.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a product catalog fails.
///
/// Individual malformed fields never produce this error; they degrade to
/// neutral defaults. Only a missing file or a document of the wrong shape does.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    /// Catalog file not found at the expected path.
    #[error("Catalog not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be read.
    #[error("Failed to read catalog at {}: {error}", path.display())]
    Io { path: PathBuf, error: String },
    /// The document is not a product array (or an object holding one).
    #[error("Failed to parse catalog: {error}")]
    Parse { error: String },
}

/// Error returned when request parameters cannot be turned into filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    #[error("Unknown sort mode '{given}'. Expected one of: {}", expected.join(", "))]
    UnknownSortMode {
        given: String,
        expected: &'static [&'static str],
    },
}

/// Error returned when the configuration file cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
