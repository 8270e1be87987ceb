use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::error::RoadmapError;

/// Fields a roadmap creation request must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "interests", "timeframe"];

/// Errors returned to API clients.
///
/// Every variant renders as `{"error": <message>, ...context}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid interests provided")]
    InvalidInterests { available: Vec<String> },

    #[error("Timeframe must be a number")]
    TimeframeNotNumeric,

    #[error("Timeframe must be between 1 and 24 months")]
    TimeframeOutOfRange,

    #[error("Missing 'completed' field in request body")]
    MissingCompleted,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Roadmap not found")]
    RoadmapNotFound,

    #[error("Invalid or missing API key")]
    Unauthorized,

    #[error(transparent)]
    Roadmap(#[from] RoadmapError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields
            | Self::InvalidInterests { .. }
            | Self::TimeframeNotNumeric
            | Self::TimeframeOutOfRange
            | Self::MissingCompleted
            | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::RoadmapNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Roadmap(e) => match e {
                RoadmapError::Validation(_) | RoadmapError::IndexOutOfRange { .. } => {
                    StatusCode::BAD_REQUEST
                }
                // Negative indices have always been reported as "not found".
                RoadmapError::NotFound(_) | RoadmapError::NegativeIndex { .. } => {
                    StatusCode::NOT_FOUND
                }
                RoadmapError::Conflict(_) => StatusCode::CONFLICT,
            },
        }
    }

    fn body(&self) -> Value {
        let mut body = json!({ "error": self.to_string() });
        match self {
            Self::MissingFields => body["required_fields"] = json!(REQUIRED_FIELDS),
            Self::InvalidInterests { available } => body["available_paths"] = json!(available),
            _ => {}
        }
        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() || status == StatusCode::CONFLICT {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "Request rejected: {}", self);
        }

        (status, Json(self.body())).into_response()
    }
}
