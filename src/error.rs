use thiserror::Error;
use uuid::Uuid;

/// Errors raised by roadmap generation and the roadmap store.
///
/// All of these follow deterministically from the input; none are retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoadmapError {
    #[error("{0}")]
    Validation(String),

    #[error("Roadmap not found")]
    NotFound(Uuid),

    #[error("Invalid milestone index")]
    NegativeIndex { index: i64 },

    #[error("Invalid milestone index")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Roadmap {0} already exists")]
    Conflict(Uuid),
}

impl RoadmapError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
