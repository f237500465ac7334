//! Recommendation engine
//!
//! Holds the voting and selection rules for song recommendations: unique
//! names on insert, bounded score changes with removal of badly rated
//! entries, and the tiered random pick. Storage is reached only through the
//! [`RecommendationRepository`] trait.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use core::{RecommendationService, ScoreTier};
pub use error::{RecommendationError, RecommendationResult, StorageError, StorageResult};
pub use services::{InMemoryRepository, SqliteRepository, ThreadRandom};
pub use traits::{MockRandomSource, MockRecommendationRepository, RandomSource, RecommendationRepository};
