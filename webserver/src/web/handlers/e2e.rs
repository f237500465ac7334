//! Test-support endpoints, mounted only when enabled

use axum::{extract::State, http::StatusCode};

use recommender::{RandomSource, RecommendationRepository};
use shared::service_warn;

use super::recommendations::ServiceState;
use crate::error::WebServerResult;

/// `POST /e2e/reset` deletes every recommendation
pub async fn reset<R, G>(State(service): ServiceState<R, G>) -> WebServerResult<StatusCode>
where
    R: RecommendationRepository + 'static,
    G: RandomSource + 'static,
{
    service.reset().await?;
    service_warn!("🧹 All recommendations deleted through /e2e/reset");
    Ok(StatusCode::NO_CONTENT)
}
