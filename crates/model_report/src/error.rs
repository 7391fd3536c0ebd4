//! Error types for the report layer.

use thiserror::Error;

/// Report sink error
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error writing an output artifact
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialisation error building the JSON summary
    #[error("Serialisation error: {0}")]
    Serialize(#[from] serde_json::Error),
}
