//! HTTP front end for the problem store.
//!
//! # Design
//! One `ProblemsService` lives behind a `tokio::sync::RwLock` inside an
//! `Arc`, shared as router state. Reads take the read lock; create, update
//! and delete take the write lock.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;

use std::sync::Arc;

use axum::{routing::get, Router};
use problems_core::ProblemsService;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::ServerConfig;
pub use error::{AppError, ErrorBody};

pub type Db = Arc<RwLock<ProblemsService>>;

pub fn app() -> Router {
    app_with(ProblemsService::new())
}

/// Router over an existing store, e.g. one seeded by a test.
pub fn app_with(service: ProblemsService) -> Router {
    let db: Db = Arc::new(RwLock::new(service));
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/problems",
            get(handlers::list_problems).post(handlers::create_problem),
        )
        .route(
            "/api/problems/{id}",
            get(handlers::get_problem)
                .put(handlers::update_problem)
                .delete(handlers::delete_problem),
        )
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}

/// Serve until ctrl-c.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
