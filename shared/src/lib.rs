//! Shared types for the recommendation service
//!
//! Contains the domain types and wire payloads used by both the engine
//! and the HTTP surface, plus the common error and logging setup.

pub mod types;
pub mod errors;
pub mod logging;
pub mod messages;

pub use types::*;
pub use errors::*;

pub use messages::{CreateRecommendationRequest, ErrorBody};
