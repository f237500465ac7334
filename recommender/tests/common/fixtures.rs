//! Test fixtures for recommendation tests

use shared::{NewRecommendation, Recommendation, RecommendationId};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const SONG_NAME: &'static str = "Falamansa - Xote dos Milagres";
    pub const SONG_LINK: &'static str = "https://www.youtube.com/watch?v=chwyjJbcs1Y";
    pub const UNKNOWN_ID: RecommendationId = 9_999;

    /// The canonical recommendation payload
    pub fn song() -> NewRecommendation {
        NewRecommendation::new(Self::SONG_NAME, Self::SONG_LINK)
    }

    /// A payload with a name no other call will produce
    pub fn random_song() -> NewRecommendation {
        let word = uuid::Uuid::new_v4().simple().to_string();
        NewRecommendation::new(format!("song-{word}"), format!("https://www.youtube.com/{word}"))
    }

    /// A stored record as a mocked store would return it
    pub fn record(id: RecommendationId, score: i64) -> Recommendation {
        Recommendation {
            id,
            name: format!("song-{id}"),
            youtube_link: format!("https://www.youtube.com/watch?v={id}"),
            score,
        }
    }

    /// Records spread over both score tiers
    pub fn mixed_pool() -> Vec<(NewRecommendation, i64)> {
        vec![
            (NewRecommendation::new("low", "https://www.youtube.com/watch?v=low"), -3),
            (NewRecommendation::new("middle", "https://www.youtube.com/watch?v=middle"), 10),
            (NewRecommendation::new("high", "https://www.youtube.com/watch?v=high"), 11),
            (NewRecommendation::new("highest", "https://www.youtube.com/watch?v=highest"), 250),
        ]
    }
}
