//! Server configuration loaded from environment variables, with optional CLI overrides.

use anyhow::Result;
use std::env;
use std::net::SocketAddr;

use storage::DEFAULT_MAX_CONNECTIONS;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./chat.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_LOG_FILE: &str = "logs/chat-api.log";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// DATABASE_URL: SQLite URL or path (`sqlite::memory:` for a throwaway database)
    pub database_url: String,
    /// BIND_ADDR
    pub bind_addr: String,
    /// LOG_FILE
    pub log_file: String,
    /// DB_MAX_CONNECTIONS: pool size for file databases
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load from environment variables. `database_url` and `bind_addr` override the env values if provided.
    /// Call validate() after load to fail fast before opening the database.
    pub fn load(database_url: Option<String>, bind_addr: Option<String>) -> Result<Self> {
        let database_url = database_url.unwrap_or_else(|| {
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
        });
        let bind_addr = bind_addr.unwrap_or_else(|| {
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        });
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Self {
            database_url,
            bind_addr,
            log_file,
            db_max_connections,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("BIND_ADDR is not a valid socket address: {}", self.bind_addr);
        }
        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL must not be empty");
        }
        Ok(())
    }
}
