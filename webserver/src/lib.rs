//! HTTP surface for the recommendation service
//!
//! Exposes the recommendation engine over a small JSON API, with request
//! validation, error mapping, configuration and graceful shutdown.

pub mod config;
pub mod error;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{ServerArgs, StorageBackend};
pub use error::{WebServerError, WebServerResult};
pub use webserver_impl::WebServer;
