//! Shared error types for the recommendation service

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid {kind} tag: {input}")]
    InvalidTag { kind: &'static str, input: String },
}
