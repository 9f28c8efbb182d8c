use thiserror::Error;

use crate::models::RecipeId;

/// Common result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the API layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset...)
    #[error("Network request failed: {0}")]
    Transport(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Recipe {0} not found")]
    NotFound(RecipeId),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status(status.as_u16()),
            None => ApiError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
