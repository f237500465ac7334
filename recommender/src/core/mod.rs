//! Core business logic modules
//!
//! `tier` holds the pure selection policy; `engine` combines it with the
//! injected store.

pub mod engine;
pub mod tier;

pub use engine::RecommendationService;
pub use tier::ScoreTier;
