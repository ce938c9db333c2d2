use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::services::providers::ProviderError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    /// Upstream answered with a non-success status, relayed to the caller as-is
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("{0}")]
    HttpClient(String),

    #[error("Unable to parse response: {0}")]
    Decode(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Per-endpoint wording used when an upstream call fails
#[derive(Debug, Clone, Copy)]
pub struct UpstreamContext {
    /// What was being fetched, e.g. "genres"
    pub resource: &'static str,
    /// Message sent along with a relayed non-success status
    pub status_message: &'static str,
}

impl AppError {
    /// Maps a provider failure 1:1 onto the response the caller sees
    pub fn from_provider(err: ProviderError, context: UpstreamContext) -> Self {
        match err {
            ProviderError::Transport(e) => {
                AppError::HttpClient(format!("Unable to fetch {}: {}", context.resource, e))
            }
            ProviderError::Status(status) => AppError::Upstream {
                status,
                message: context.status_message.to_string(),
            },
            ProviderError::Decode(e) => AppError::Decode(e.to_string()),
            ProviderError::InvalidUrl(msg) => AppError::Internal(msg),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => *status,
            AppError::HttpClient(_) | AppError::Decode(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "Request failed");
        }

        (status, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
