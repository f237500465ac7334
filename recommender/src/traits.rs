//! Trait definitions with mockall annotations for testing
//!
//! The engine reaches storage and randomness only through these traits, so
//! both can be swapped for mocks or in-memory doubles in tests.

use shared::{NewRecommendation, Recommendation, RecommendationId, ScoreOperation, ScoreQuery};

use crate::error::StorageResult;

/// Persistence gateway for recommendations
///
/// Implementations must enforce name uniqueness themselves and apply score
/// updates atomically.
#[mockall::automock]
#[async_trait::async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Look up a recommendation by its exact name
    async fn find_by_name(&self, name: &str) -> StorageResult<Option<Recommendation>>;

    /// Look up a recommendation by id
    async fn find(&self, id: RecommendationId) -> StorageResult<Option<Recommendation>>;

    /// Persist a new recommendation with a score of zero
    ///
    /// # Returns
    /// The stored record including its assigned id
    async fn create(&self, data: NewRecommendation) -> StorageResult<Recommendation>;

    /// Apply a score operation and return the record as it is after the update
    async fn update_score(&self, id: RecommendationId, operation: ScoreOperation) -> StorageResult<Recommendation>;

    /// Delete a recommendation
    async fn remove(&self, id: RecommendationId) -> StorageResult<()>;

    /// List recommendations, optionally restricted by score
    async fn find_all(&self, query: Option<ScoreQuery>) -> StorageResult<Vec<Recommendation>>;

    /// List at most `amount` recommendations ordered by score, highest first
    async fn find_top(&self, amount: u32) -> StorageResult<Vec<Recommendation>>;

    /// Delete every recommendation (test support)
    async fn truncate(&self) -> StorageResult<()>;
}

/// Source of uniform random values in `[0, 1)`
#[mockall::automock]
pub trait RandomSource: Send + Sync {
    fn next_f64(&self) -> f64;
}
