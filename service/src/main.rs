//! Barber Sync Service
//!
//! Keeps barber profiles consistent with user roles. Receives user update events,
//! creates a profile when a user becomes a barber and deletes it when they stop
//! being one. Uses hexagonal (ports & adapters) architecture for clean separation
//! of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresBarberRepository;
use app::RoleReconciler;
use config::Config;
use domain::ports::BarberRepository;

/// Application state shared across all handlers
pub struct AppState<BR>
where
    BR: BarberRepository,
{
    pub reconciler: Arc<RoleReconciler<BR>>,
    pub event_secret: Option<String>,
}

impl<BR> Clone for AppState<BR>
where
    BR: BarberRepository,
{
    fn clone(&self) -> Self {
        Self {
            reconciler: self.reconciler.clone(),
            event_secret: self.event_secret.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router for a given barber store
pub fn router<BR>(state: AppState<BR>) -> Router
where
    BR: BarberRepository + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/events/user-updated", post(handlers::user_updated::<BR>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,barber_sync=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting barber sync...");

    let config = Config::from_env()?;

    // One connection pool for the whole process, shared by every event
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let barber_repo = Arc::new(PostgresBarberRepository::new(db));
    let reconciler = Arc::new(RoleReconciler::new(barber_repo));

    if config.event_secret.is_none() {
        tracing::warn!("EVENT_SECRET not set, event signatures will not be verified");
    }

    let state = AppState {
        reconciler,
        event_secret: config.event_secret.clone(),
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
