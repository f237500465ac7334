//! Recommendation API entry point
//!
//! Reads configuration from flags, the environment and `.env`, opens the
//! configured store and serves until Ctrl+C.

use tokio::signal;

use recommender::{InMemoryRepository, RecommendationService, SqliteRepository, ThreadRandom};
use shared::{logging, service_info};
use webserver::{ServerArgs, StorageBackend, WebServer, WebServerResult};

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = ServerArgs::load();

    logging::init_tracing(Some(&args.log_level));
    logging::log_startup("recommendation API");

    args.validate()?;
    let addr = args.socket_addr()?;

    match args.storage {
        StorageBackend::Sqlite => {
            service_info!("🗄️ Opening SQLite store at {}", args.database_url);
            let repository = SqliteRepository::connect(&args.database_url).await?;

            let server = WebServer::new(RecommendationService::new(repository.clone(), ThreadRandom::new()))
                .with_e2e_routes(args.enable_e2e);
            let result = server.run(addr, shutdown_signal()).await;

            // Release the pool whether or not serving succeeded
            repository.close().await;
            result?;
        }
        StorageBackend::Memory => {
            service_info!("🧠 Using in-memory store");
            let server = WebServer::new(RecommendationService::new(InMemoryRepository::new(), ThreadRandom::new()))
                .with_e2e_routes(args.enable_e2e);
            server.run(addr, shutdown_signal()).await?;
        }
    }

    logging::log_success("Recommendation API stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown("Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error("Signal handling", &err);
            // Without a signal handler, keep serving until the process is killed
            std::future::pending::<()>().await;
        }
    }
}
