//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers for the recommendation engine suites.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{ScriptedRandom, TestHelpers};
