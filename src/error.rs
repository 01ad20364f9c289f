//! Error types shared by the loader, the viewer session and the configuration layer.

use std::path::PathBuf;

/// Errors raised while reading channel data from disk.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The source file does not exist. Recoverable: the viewer substitutes synthetic data.
    #[error("channel data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A required column is absent from the header row.
    #[error("{channel} CSV file must contain a '{column}' column")]
    MissingColumn { channel: String, column: String },

    /// The CSV reader rejected the file.
    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// IO error from filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration names no channels at all.
    #[error("no channels configured")]
    NoChannels,
}

impl LoadError {
    /// Whether the viewer may fall back to synthetic data for this error
    /// without an explicit configuration opt-in.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

/// Contract violations reported by the viewer core.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    #[error("gain {0} is not one of 0.5, 1, 2, 5, 10")]
    InvalidGain(f64),

    #[error("unknown channel index {0}")]
    UnknownChannel(usize),

    #[error("a viewer needs at least one channel")]
    NoChannels,

    #[error("unknown PGA setting '{0}'")]
    UnknownPgaSetting(String),
}

/// Errors raised while reading a [`ViewerConfig`](crate::config::ViewerConfig).
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
