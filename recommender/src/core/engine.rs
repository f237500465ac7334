//! Recommendation service
//!
//! Applies the voting and selection rules on top of an injected store and
//! random source. The service keeps no state of its own.

use shared::{NewRecommendation, Recommendation, RecommendationId, ScoreOperation, service_debug, service_info};

use crate::core::tier::{self, ScoreTier};
use crate::error::{RecommendationError, RecommendationResult};
use crate::traits::{RandomSource, RecommendationRepository};

pub struct RecommendationService<R, G>
where
    R: RecommendationRepository,
    G: RandomSource,
{
    repository: R,
    random: G,
}

impl<R, G> RecommendationService<R, G>
where
    R: RecommendationRepository,
    G: RandomSource,
{
    pub fn new(repository: R, random: G) -> Self {
        Self { repository, random }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Create a recommendation with a score of zero
    ///
    /// Fails with a conflict, without writing, when the name is taken.
    pub async fn insert(&self, data: NewRecommendation) -> RecommendationResult<Recommendation> {
        if self.repository.find_by_name(&data.name).await?.is_some() {
            service_debug!(name = %data.name, "Rejected duplicate recommendation name");
            return Err(RecommendationError::conflict());
        }

        let created = self.repository.create(data).await?;
        service_info!(id = created.id, name = %created.name, "Recommendation created");
        Ok(created)
    }

    pub async fn upvote(&self, id: RecommendationId) -> RecommendationResult<()> {
        self.ensure_exists(id).await?;
        let updated = self.repository.update_score(id, ScoreOperation::Increment).await?;
        service_info!(id, score = updated.score, "Recommendation upvoted");
        Ok(())
    }

    /// Lower the score by one, removing the recommendation once it falls below -5
    pub async fn downvote(&self, id: RecommendationId) -> RecommendationResult<()> {
        self.ensure_exists(id).await?;
        let updated = self.repository.update_score(id, ScoreOperation::Decrement).await?;

        // Decide on the score the update returned, not on a fresh read
        if tier::should_remove(updated.score) {
            self.repository.remove(id).await?;
            service_info!(id, score = updated.score, "Recommendation removed after downvote");
        } else {
            service_info!(id, score = updated.score, "Recommendation downvoted");
        }
        Ok(())
    }

    pub async fn get(&self) -> RecommendationResult<Vec<Recommendation>> {
        Ok(self.repository.find_all(None).await?)
    }

    pub async fn get_by_id(&self, id: RecommendationId) -> RecommendationResult<Recommendation> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(RecommendationError::not_found)
    }

    pub async fn get_top(&self, amount: u32) -> RecommendationResult<Vec<Recommendation>> {
        Ok(self.repository.find_top(amount).await?)
    }

    /// Pick one recommendation at random, favouring the normal score tier
    ///
    /// 70% of draws pick from scores <= 10 and the rest from scores > 10.
    /// An empty tier fails with not found; the other tier is never tried.
    pub async fn get_random(&self) -> RecommendationResult<Recommendation> {
        let tier = ScoreTier::from_draw(self.random.next_f64());
        let mut pool = self.repository.find_all(Some(tier.query())).await?;
        service_debug!(?tier, candidates = pool.len(), "Drawing random recommendation");
        if pool.is_empty() {
            return Err(RecommendationError::not_found());
        }

        let Some(index) = tier::pick_index(self.random.next_f64(), pool.len()) else {
            return Err(RecommendationError::not_found());
        };
        Ok(pool.swap_remove(index))
    }

    /// Delete every recommendation
    pub async fn reset(&self) -> RecommendationResult<()> {
        self.repository.truncate().await?;
        service_info!("All recommendations removed");
        Ok(())
    }

    async fn ensure_exists(&self, id: RecommendationId) -> RecommendationResult<Recommendation> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(RecommendationError::not_found)
    }
}
