//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

use recommender::{InMemoryRepository, MockRandomSource, RecommendationService};
use webserver::WebServer;

/// Random source that always returns `draw`
pub fn fixed_random(draw: f64) -> MockRandomSource {
    let mut random = MockRandomSource::new();
    random.expect_next_f64().returning(move || draw);
    random
}

/// Router over an empty in-memory store
pub fn memory_router(enable_e2e: bool) -> (Router, InMemoryRepository) {
    memory_router_with_draw(enable_e2e, 0.0)
}

/// Router over an empty in-memory store with a fixed random draw
pub fn memory_router_with_draw(enable_e2e: bool, draw: f64) -> (Router, InMemoryRepository) {
    let repository = InMemoryRepository::new();
    let service = RecommendationService::new(repository.clone(), fixed_random(draw));
    let router = WebServer::new(service).with_e2e_routes(enable_e2e).build_router();
    (router, repository)
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

/// Send one request through the router and collect the response
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

pub fn parse<T: DeserializeOwned>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap()
}
