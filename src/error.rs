//! Error types for spike localization.

use thiserror::Error;

use crate::types::ChannelId;

/// Result type alias for localization operations.
pub type Result<T> = std::result::Result<T, LocalizeError>;

/// Failure reasons from localization and geometry loading.
#[derive(Error, Debug)]
pub enum LocalizeError {
    /// The estimator received no samples, or a reading was not finite.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A channel referenced by a spike has no known position.
    #[error("No geometry entry for channel {channel}")]
    MissingGeometry {
        /// Channel that could not be found.
        channel: ChannelId,
    },

    /// A probe description could not be parsed.
    #[error("Geometry parse error on line {line}: {reason}")]
    GeometryParse {
        /// 1-based line number (0 when the error concerns the whole table).
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LocalizeError {
    /// Whether the pipeline may skip the offending spike and continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingGeometry { .. })
    }
}
