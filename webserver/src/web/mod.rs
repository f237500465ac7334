//! HTTP routes, handlers and request validation

pub mod handlers;
pub mod validation;

pub use validation::validate_create;
