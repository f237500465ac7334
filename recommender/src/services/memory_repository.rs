//! In-memory recommendation store
//!
//! Used as the test double for the engine and as the `memory` storage
//! backend. Ids are sequential starting at 1 and listings keep insertion
//! order.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use shared::{NewRecommendation, Recommendation, RecommendationId, ScoreOperation, ScoreQuery};

use crate::error::{StorageError, StorageResult};
use crate::traits::RecommendationRepository;

#[derive(Debug, Default)]
struct Store {
    records: Vec<Recommendation>,
    next_id: RecommendationId,
}

/// Recommendation store kept in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored recommendations
    pub async fn count(&self) -> usize {
        self.store.read().await.records.len()
    }

    /// Store a recommendation with a preset score, bypassing vote rules
    pub async fn seed(&self, data: NewRecommendation, score: i64) -> StorageResult<Recommendation> {
        let created = self.create(data).await?;
        let mut store = self.store.write().await;
        let record = store
            .records
            .iter_mut()
            .find(|r| r.id == created.id)
            .ok_or(StorageError::RecordMissing { id: created.id })?;
        record.score = score;
        Ok(record.clone())
    }
}

#[async_trait]
impl RecommendationRepository for InMemoryRepository {
    async fn find_by_name(&self, name: &str) -> StorageResult<Option<Recommendation>> {
        let store = self.store.read().await;
        Ok(store.records.iter().find(|r| r.name == name).cloned())
    }

    async fn find(&self, id: RecommendationId) -> StorageResult<Option<Recommendation>> {
        let store = self.store.read().await;
        Ok(store.records.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, data: NewRecommendation) -> StorageResult<Recommendation> {
        let mut store = self.store.write().await;
        if store.records.iter().any(|r| r.name == data.name) {
            return Err(StorageError::UniqueViolation {
                field: "name".to_string(),
                value: data.name,
            });
        }

        store.next_id += 1;
        let record = Recommendation {
            id: store.next_id,
            name: data.name,
            youtube_link: data.youtube_link,
            score: 0,
        };
        store.records.push(record.clone());
        Ok(record)
    }

    async fn update_score(&self, id: RecommendationId, operation: ScoreOperation) -> StorageResult<Recommendation> {
        let mut store = self.store.write().await;
        let record = store
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StorageError::RecordMissing { id })?;
        record.score += operation.delta();
        Ok(record.clone())
    }

    async fn remove(&self, id: RecommendationId) -> StorageResult<()> {
        let mut store = self.store.write().await;
        store.records.retain(|r| r.id != id);
        Ok(())
    }

    async fn find_all(&self, query: Option<ScoreQuery>) -> StorageResult<Vec<Recommendation>> {
        let store = self.store.read().await;
        Ok(store
            .records
            .iter()
            .filter(|r| query.is_none_or(|q| q.matches(r)))
            .cloned()
            .collect())
    }

    async fn find_top(&self, amount: u32) -> StorageResult<Vec<Recommendation>> {
        let store = self.store.read().await;
        let mut records = store.records.clone();
        // Stable sort: equal scores keep insertion order
        records.sort_by(|a, b| b.score.cmp(&a.score));
        records.truncate(amount as usize);
        Ok(records)
    }

    async fn truncate(&self) -> StorageResult<()> {
        let mut store = self.store.write().await;
        store.records.clear();
        store.next_id = 0;
        Ok(())
    }
}
