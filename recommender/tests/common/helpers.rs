//! Test helpers for recommendation tests

use std::collections::VecDeque;
use std::sync::Mutex;

use recommender::{
    InMemoryRepository, MockRandomSource, MockRecommendationRepository, RandomSource, RecommendationService,
};
use shared::{NewRecommendation, Recommendation};

/// Random source replaying a fixed list of draws, then repeating the last one
pub struct ScriptedRandom {
    draws: Mutex<VecDeque<f64>>,
    last: Mutex<f64>,
}

impl ScriptedRandom {
    pub fn new(draws: &[f64]) -> Self {
        Self {
            draws: Mutex::new(draws.iter().copied().collect()),
            last: Mutex::new(draws.last().copied().unwrap_or(0.0)),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&self) -> f64 {
        match self.draws.lock().unwrap().pop_front() {
            Some(draw) => {
                *self.last.lock().unwrap() = draw;
                draw
            }
            None => *self.last.lock().unwrap(),
        }
    }
}

pub type MockedService = RecommendationService<MockRecommendationRepository, MockRandomSource>;
pub type MemoryService = RecommendationService<InMemoryRepository, ScriptedRandom>;

pub struct TestHelpers;

impl TestHelpers {
    /// Service over a mocked store with the given expectations
    pub fn mocked<F>(setup: F) -> MockedService
    where
        F: FnOnce(&mut MockRecommendationRepository),
    {
        let mut repository = MockRecommendationRepository::new();
        setup(&mut repository);
        RecommendationService::new(repository, MockRandomSource::new())
    }

    /// Service over a mocked store and random source
    pub fn mocked_with_random<F>(draws: Vec<f64>, setup: F) -> MockedService
    where
        F: FnOnce(&mut MockRecommendationRepository),
    {
        let mut repository = MockRecommendationRepository::new();
        setup(&mut repository);

        let mut random = MockRandomSource::new();
        let mut sequence = mockall::Sequence::new();
        for draw in draws {
            random
                .expect_next_f64()
                .times(1)
                .in_sequence(&mut sequence)
                .return_const(draw);
        }
        RecommendationService::new(repository, random)
    }

    /// Service over an empty in-memory store
    pub fn in_memory(draws: &[f64]) -> (MemoryService, InMemoryRepository) {
        let repository = InMemoryRepository::new();
        let service = RecommendationService::new(repository.clone(), ScriptedRandom::new(draws));
        (service, repository)
    }

    /// Service over an in-memory store preloaded with scored records
    pub async fn seeded(draws: &[f64], records: Vec<(NewRecommendation, i64)>) -> (MemoryService, Vec<Recommendation>) {
        let (service, repository) = Self::in_memory(draws);
        let mut stored = Vec::new();
        for (data, score) in records {
            stored.push(repository.seed(data, score).await.unwrap());
        }
        (service, stored)
    }
}
