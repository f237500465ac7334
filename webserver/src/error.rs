//! WebServer-specific error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use recommender::{RecommendationError, StorageError};
use shared::{ErrorBody, ErrorKind, logging};

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error(transparent)]
    Recommendation(#[from] RecommendationError),

    #[error("Storage setup failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config {
            message: message.into(),
        }
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest {
            details: details.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WebServerError::InvalidRequest { .. } => ErrorKind::UnprocessableEntity,
            WebServerError::Recommendation(error) => error.kind(),
            _ => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let message = match &self {
            WebServerError::InvalidRequest { details } => details.clone(),
            WebServerError::Recommendation(error) => error.public_message().to_string(),
            _ => "Internal server error".to_string(),
        };

        if kind == ErrorKind::Internal {
            logging::log_error("Request", &self);
        }

        (self.status_code(), Json(ErrorBody::new(kind, message))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
