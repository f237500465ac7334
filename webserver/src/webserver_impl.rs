//! Main webserver implementation
//!
//! `WebServer` wraps an injected [`RecommendationService`] and exposes it over
//! HTTP. The store and random source stay generic so tests can build the same
//! router over mocks or the in-memory store.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use recommender::{RandomSource, RecommendationRepository, RecommendationService};
use shared::service_info;

use crate::error::{WebServerError, WebServerResult};
use crate::web::handlers::{e2e, health, recommendations};

pub struct WebServer<R, G>
where
    R: RecommendationRepository,
    G: RandomSource,
{
    service: Arc<RecommendationService<R, G>>,
    enable_e2e: bool,
}

impl<R, G> WebServer<R, G>
where
    R: RecommendationRepository + 'static,
    G: RandomSource + 'static,
{
    pub fn new(service: RecommendationService<R, G>) -> Self {
        Self {
            service: Arc::new(service),
            enable_e2e: false,
        }
    }

    /// Mount `POST /e2e/reset`
    pub fn with_e2e_routes(mut self, enabled: bool) -> Self {
        self.enable_e2e = enabled;
        self
    }

    pub fn service(&self) -> &Arc<RecommendationService<R, G>> {
        &self.service
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let mut router = Router::new()
            .route(
                "/recommendations",
                post(recommendations::create::<R, G>).get(recommendations::list::<R, G>),
            )
            // Static segments win over `:id`
            .route("/recommendations/random", get(recommendations::random::<R, G>))
            .route("/recommendations/top/:amount", get(recommendations::top::<R, G>))
            .route("/recommendations/:id", get(recommendations::get_by_id::<R, G>))
            .route("/recommendations/:id/upvote", post(recommendations::upvote::<R, G>))
            .route("/recommendations/:id/downvote", post(recommendations::downvote::<R, G>))
            .route("/health", get(health::health_check));

        if self.enable_e2e {
            router = router.route("/e2e/reset", post(e2e::reset::<R, G>));
        }

        router
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.service.clone())
    }

    /// Bind `addr` and serve until `shutdown` resolves
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", addr, e)))?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        service_info!("🌐 Server listening on http://{}", local_addr);
        if self.enable_e2e {
            service_info!("🧪 E2E reset route enabled");
        }

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await?;

        service_info!("HTTP server on {} stopped", local_addr);
        Ok(())
    }
}
