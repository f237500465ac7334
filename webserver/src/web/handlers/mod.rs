//! Axum handlers
//!
//! Handlers are generic over the store and random source so the router can be
//! built against real or mocked dependencies.

pub mod e2e;
pub mod health;
pub mod recommendations;
