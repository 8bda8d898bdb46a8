use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No documents were supplied, so no vector space can be built.
    #[error("Empty corpus: at least one FAQ entry is required")]
    EmptyCorpus,

    /// Similarity thresholds live on the [0, 1] scale.
    #[error("Invalid threshold {0}: must be within [0, 1]")]
    InvalidThreshold(f64),

    #[error("Malformed FAQ entry {id}: {reason}")]
    MalformedEntry { id: i64, reason: String },

    #[error("Duplicate FAQ id: {0}")]
    DuplicateId(i64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store failed: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Accepts thresholds in [0, 1]; NaN and out-of-range values are rejected, never clamped.
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(Error::InvalidThreshold(threshold))
    }
}
