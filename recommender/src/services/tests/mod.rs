//! Store tests
//!
//! Both stores run the same gateway contract checks from `common`; each file
//! adds checks specific to its backend.


pub mod common {
    use shared::{NewRecommendation, ScoreFilter, ScoreOperation, ScoreQuery};

    use crate::error::StorageError;
    use crate::traits::RecommendationRepository;

    pub fn song(name: &str) -> NewRecommendation {
        NewRecommendation::new(name, format!("https://www.youtube.com/watch?v={name}"))
    }

    pub async fn create_assigns_ids_and_zero_score<R: RecommendationRepository>(repository: &R) {
        let first = repository.create(song("first")).await.unwrap();
        let second = repository.create(song("second")).await.unwrap();

        assert_eq!(first.score, 0);
        assert_eq!(second.score, 0);
        assert_ne!(first.id, second.id);
        assert_eq!(first.youtube_link, "https://www.youtube.com/watch?v=first");
    }

    pub async fn create_rejects_duplicate_names<R: RecommendationRepository>(repository: &R) {
        repository.create(song("dup")).await.unwrap();
        let result = repository.create(song("dup")).await;

        assert!(matches!(result, Err(StorageError::UniqueViolation { .. })));
        assert_eq!(repository.find_all(None).await.unwrap().len(), 1);
    }

    pub async fn lookups_by_id_and_name<R: RecommendationRepository>(repository: &R) {
        let created = repository.create(song("Lookup")).await.unwrap();

        assert_eq!(repository.find(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(repository.find_by_name("Lookup").await.unwrap(), Some(created.clone()));
        // Name matching is exact and case-sensitive
        assert_eq!(repository.find_by_name("lookup").await.unwrap(), None);
        assert_eq!(repository.find(created.id + 100).await.unwrap(), None);
    }

    pub async fn update_score_returns_new_value<R: RecommendationRepository>(repository: &R) {
        let created = repository.create(song("votes")).await.unwrap();

        let up = repository.update_score(created.id, ScoreOperation::Increment).await.unwrap();
        assert_eq!(up.score, 1);
        let down = repository.update_score(created.id, ScoreOperation::Decrement).await.unwrap();
        let down = repository.update_score(down.id, ScoreOperation::Decrement).await.unwrap();
        assert_eq!(down.score, -1);

        let stored = repository.find(created.id).await.unwrap().unwrap();
        assert_eq!(stored.score, -1);
    }

    pub async fn update_score_on_missing_record<R: RecommendationRepository>(repository: &R) {
        let result = repository.update_score(404, ScoreOperation::Increment).await;
        assert!(matches!(result, Err(StorageError::RecordMissing { id: 404 })));
    }

    pub async fn remove_deletes_record<R: RecommendationRepository>(repository: &R) {
        let created = repository.create(song("gone")).await.unwrap();
        repository.remove(created.id).await.unwrap();

        assert_eq!(repository.find(created.id).await.unwrap(), None);
        // The name becomes available again
        assert!(repository.create(song("gone")).await.is_ok());
    }

    pub async fn find_all_filters_by_score<R: RecommendationRepository>(repository: &R) {
        let low = repository.create(song("low")).await.unwrap();
        let high = repository.create(song("high")).await.unwrap();
        for _ in 0..11 {
            repository.update_score(high.id, ScoreOperation::Increment).await.unwrap();
        }

        let all = repository.find_all(None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, low.id);

        let lte = repository.find_all(Some(ScoreQuery::new(10, ScoreFilter::Lte))).await.unwrap();
        assert_eq!(lte.iter().map(|r| r.id).collect::<Vec<_>>(), vec![low.id]);

        let gt = repository.find_all(Some(ScoreQuery::new(10, ScoreFilter::Gt))).await.unwrap();
        assert_eq!(gt.iter().map(|r| r.id).collect::<Vec<_>>(), vec![high.id]);
    }

    pub async fn find_top_orders_and_limits<R: RecommendationRepository>(repository: &R) {
        for (name, votes) in [("one", 1), ("three", 3), ("two", 2)] {
            let created = repository.create(song(name)).await.unwrap();
            for _ in 0..votes {
                repository.update_score(created.id, ScoreOperation::Increment).await.unwrap();
            }
        }

        let top = repository.find_top(2).await.unwrap();
        assert_eq!(top.iter().map(|r| r.score).collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(repository.find_top(10).await.unwrap().len(), 3);
        assert!(repository.find_top(0).await.unwrap().is_empty());
    }

    pub async fn truncate_empties_store<R: RecommendationRepository>(repository: &R) {
        repository.create(song("a")).await.unwrap();
        repository.create(song("b")).await.unwrap();

        repository.truncate().await.unwrap();
        assert!(repository.find_all(None).await.unwrap().is_empty());

        let fresh = repository.create(song("a")).await.unwrap();
        assert_eq!(fresh.id, 1);
    }
}
