//! Service implementations
//!
//! Real implementations of the service traits: two recommendation stores
//! and the thread-local random source.

pub mod memory_repository;
pub mod random;
pub mod sqlite_repository;

// Re-export all service implementations
pub use memory_repository::InMemoryRepository;
pub use random::ThreadRandom;
pub use sqlite_repository::SqliteRepository;

#[cfg(test)]
mod tests;
