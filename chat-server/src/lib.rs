//! # chat-server
//!
//! HTTP API layer over a [`chat_core::MessageStore`]: configuration, axum routes, request tracing and
//! error-to-status mapping. Handlers validate shape and delegate; they hold no business logic.

pub mod cli;
pub mod config;
pub mod error;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod trace;

pub use cli::{Cli, Commands};
pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;

use anyhow::{Context, Result};
use chat_core::{MessageStore, StoredQuiz};
use middleware::LoggingMiddleware;
use std::sync::Arc;
use storage::SqliteMessageStore;
use store_chain::StoreChain;
use tracing::info;

/// Opens the SQLite store and wraps it with the logging middleware.
pub async fn open_store(config: &ServerConfig) -> Result<StoreChain> {
    let store = SqliteMessageStore::open_with_max_connections(
        &config.database_url,
        config.db_max_connections,
    )
    .await
    .with_context(|| format!("Open database {}", config.database_url))?;

    Ok(StoreChain::new(Arc::new(store)).add_middleware(Arc::new(LoggingMiddleware)))
}

/// Validates `config`, opens the store and inserts one standalone quiz.
pub async fn add_quiz(config: &ServerConfig, question: &str, answer: &str) -> Result<StoredQuiz> {
    config.validate()?;
    let store = open_store(config).await?;
    store
        .create_quiz(question, answer)
        .await
        .context("Create quiz")
}

/// Serves the API until Ctrl-C.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let store = open_store(&config).await?;
    let app = build_router(AppState::new(Arc::new(store)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, database_url = %config.database_url, "chat-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("chat-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
