//! Recommendation engine error types

use thiserror::Error;

use shared::{ErrorKind, RecommendationId};

/// Message returned when a name is already taken
pub const DUPLICATE_NAME_MESSAGE: &str = "Recommendations names must be unique";

/// Failures raised by a recommendation store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unique constraint violated on {field}: {value}")]
    UniqueViolation { field: String, value: String },

    #[error("Recommendation {id} disappeared during update")]
    RecordMissing { id: RecommendationId },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Failures surfaced by the recommendation service
#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("{message}")]
    Conflict { message: String },

    #[error("Recommendation not found")]
    NotFound { message: String },

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl RecommendationError {
    pub fn conflict() -> Self {
        RecommendationError::Conflict {
            message: DUPLICATE_NAME_MESSAGE.to_string(),
        }
    }

    pub fn not_found() -> Self {
        RecommendationError::NotFound {
            message: String::new(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RecommendationError::Conflict { .. } => ErrorKind::Conflict,
            RecommendationError::NotFound { .. } => ErrorKind::NotFound,
            RecommendationError::Storage(_) => ErrorKind::Internal,
        }
    }

    /// Message exposed to API clients
    pub fn public_message(&self) -> &str {
        match self {
            RecommendationError::Conflict { message } | RecommendationError::NotFound { message } => message,
            RecommendationError::Storage(_) => "Internal server error",
        }
    }
}

impl From<StorageError> for RecommendationError {
    fn from(error: StorageError) -> Self {
        match error {
            // The store's own constraint caught a concurrent insert
            StorageError::UniqueViolation { .. } => RecommendationError::conflict(),
            StorageError::RecordMissing { .. } => RecommendationError::not_found(),
            other => RecommendationError::Storage(other),
        }
    }
}

pub type RecommendationResult<T> = Result<T, RecommendationError>;
