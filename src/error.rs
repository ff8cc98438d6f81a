use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A filesystem operation on a catalog path failed
    #[error("Failed to {action} {path}: {source}\n\nTip: Fix the underlying condition and re-run; catalogs are regenerable from source")]
    Fs {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the catalog tree failed
    #[error("Failed to walk catalog directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the project configuration file
    #[error("Failed to parse config file {file}:\n{reason}\n\nTip: Verify the TOML syntax is correct")]
    ConfigParse { file: PathBuf, reason: String },

    /// Failed to serialize the catalog manifest
    #[error("Failed to serialize catalog manifest: {0}")]
    Json(#[from] serde_json::Error),

    /// Strict translation check found empty messages
    #[error("[i18n] strict check failed: {missing} empty msgstr in target locales.")]
    IncompleteTranslations { missing: usize },
}

impl CatalogError {
    /// Wrap an IO error with the action and path that produced it
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Fs {
            action,
            path: path.into(),
            source,
        }
    }

    /// Create a ConfigParse error from a file path and reason
    pub fn config_parse(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
