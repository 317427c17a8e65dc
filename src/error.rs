//! Error types with actionable diagnostics.
//!
//! Every failure the chart pipeline can report carries enough context to find
//! the offending trial or setting without re-running with extra logging.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors raised while selecting, scaling, projecting or loading trials.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A completed trial has no value for a requested axis.
    #[error("Trial '{trial_id}' (index {index}) has no value for axis '{axis}'\n  → Every completed trial must report each plotted metric or parameter")]
    MissingAxisValue {
        trial_id: String,
        index: usize,
        axis: String,
    },

    /// No completed trials exist to derive a domain from.
    #[error("No completed trials to build a scale for axis '{axis}'")]
    EmptyDomain { axis: String },

    /// The upstream fetch was cancelled before it resolved.
    #[error("Trial fetch aborted")]
    AbortedFetch,

    /// Charts plot between one and three axes.
    #[error("Unsupported axis count: {count}\n  → Select 1, 2 or 3 axes")]
    InvalidAxisCount { count: usize },

    /// Axis kind prefix is not `metric` or `param`.
    #[error("Unknown axis kind '{kind}'\n  → Use 'metric:NAME' or 'param:NAME'")]
    UnknownAxisKind { kind: String },

    /// Chart configuration value is invalid.
    #[error("Invalid chart configuration for '{field}': {message}")]
    Config { field: String, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Trial list or chart output JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart configuration YAML error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ChartError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create an IO error for a file path.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::io(format!("failed to read {}", path.display()), source)
    }

    /// Create a configuration error.
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config { field: field.into(), message: message.into() }
    }

    /// Check whether the chart can recover locally (placeholder or no update).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyDomain { .. } | Self::AbortedFetch)
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingAxisValue { .. } => "E001",
            Self::EmptyDomain { .. } => "E002",
            Self::AbortedFetch => "E003",
            Self::InvalidAxisCount { .. } => "E010",
            Self::UnknownAxisKind { .. } => "E011",
            Self::Config { .. } => "E020",
            Self::Io { .. } => "E050",
            Self::Json(_) => "E051",
            Self::Yaml(_) => "E052",
        }
    }
}
