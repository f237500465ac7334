//! Command line and environment configuration
//!
//! Every option can be given as a flag or through the environment; a `.env`
//! file in the working directory is loaded before parsing.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

use crate::error::{WebServerError, WebServerResult};

/// Where recommendations are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// SQLite database at `--database-url`
    Sqlite,
    /// Process memory, lost on exit
    Memory,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "webserver")]
#[command(about = "Song recommendation API")]
pub struct ServerArgs {
    /// Port for the HTTP server
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://recommendations.db")]
    pub database_url: String,

    /// Storage backend
    #[arg(long, env = "STORAGE", value_enum, default_value = "sqlite")]
    pub storage: StorageBackend,

    /// Mount `POST /e2e/reset`, which deletes every recommendation
    #[arg(long, env = "ENABLE_E2E", default_value_t = false)]
    pub enable_e2e: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerArgs {
    /// Load `.env` (if present) and parse the process arguments
    pub fn load() -> Self {
        // A missing .env file is fine
        let _ = dotenv::dotenv();
        Self::parse()
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> WebServerResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid host '{}': {}", self.host, e)))
    }

    /// Check option combinations before anything is started
    pub fn validate(&self) -> WebServerResult<()> {
        if self.storage == StorageBackend::Sqlite && self.database_url.trim().is_empty() {
            return Err(WebServerError::config("DATABASE_URL must not be empty for sqlite storage"));
        }
        self.socket_addr().map(|_| ())
    }
}
