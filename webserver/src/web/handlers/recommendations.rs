//! Recommendation API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use recommender::{RandomSource, RecommendationRepository, RecommendationService};
use shared::{CreateRecommendationRequest, Recommendation, RecommendationId};

use crate::error::WebServerResult;
use crate::web::validation::validate_create;

/// Shared handler state
pub type ServiceState<R, G> = State<Arc<RecommendationService<R, G>>>;

/// `POST /recommendations`
pub async fn create<R, G>(
    State(service): ServiceState<R, G>,
    Json(request): Json<CreateRecommendationRequest>,
) -> WebServerResult<(StatusCode, Json<Recommendation>)>
where
    R: RecommendationRepository + 'static,
    G: RandomSource + 'static,
{
    let data = validate_create(request)?;
    let created = service.insert(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /recommendations`
pub async fn list<R, G>(State(service): ServiceState<R, G>) -> WebServerResult<Json<Vec<Recommendation>>>
where
    R: RecommendationRepository + 'static,
    G: RandomSource + 'static,
{
    Ok(Json(service.get().await?))
}

/// `GET /recommendations/:id`
pub async fn get_by_id<R, G>(
    State(service): ServiceState<R, G>,
    Path(id): Path<RecommendationId>,
) -> WebServerResult<Json<Recommendation>>
where
    R: RecommendationRepository + 'static,
    G: RandomSource + 'static,
{
    Ok(Json(service.get_by_id(id).await?))
}

/// `GET /recommendations/top/:amount`
pub async fn top<R, G>(
    State(service): ServiceState<R, G>,
    Path(amount): Path<u32>,
) -> WebServerResult<Json<Vec<Recommendation>>>
where
    R: RecommendationRepository + 'static,
    G: RandomSource + 'static,
{
    Ok(Json(service.get_top(amount).await?))
}

/// `GET /recommendations/random`
pub async fn random<R, G>(State(service): ServiceState<R, G>) -> WebServerResult<Json<Recommendation>>
where
    R: RecommendationRepository + 'static,
    G: RandomSource + 'static,
{
    Ok(Json(service.get_random().await?))
}

/// `POST /recommendations/:id/upvote`
pub async fn upvote<R, G>(
    State(service): ServiceState<R, G>,
    Path(id): Path<RecommendationId>,
) -> WebServerResult<StatusCode>
where
    R: RecommendationRepository + 'static,
    G: RandomSource + 'static,
{
    service.upvote(id).await?;
    Ok(StatusCode::OK)
}

/// `POST /recommendations/:id/downvote`
pub async fn downvote<R, G>(
    State(service): ServiceState<R, G>,
    Path(id): Path<RecommendationId>,
) -> WebServerResult<StatusCode>
where
    R: RecommendationRepository + 'static,
    G: RandomSource + 'static,
{
    service.downvote(id).await?;
    Ok(StatusCode::OK)
}
