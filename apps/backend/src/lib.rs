pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::services::session::{MemorySessionStore, SessionStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub sessions: Arc<dyn SessionStore>,
    pub config: Arc<Config>,
}

/// Build the full router for the given state.
pub fn build_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        // Quiz routes
        .route("/api/card/random", get(routes::quiz::random_card))
        .route("/api/check", post(routes::quiz::check))
        .route("/api/give_up", post(routes::quiz::give_up))
        .route("/api/hint", post(routes::quiz::hint))
        // Card routes
        .route("/api/card", post(routes::cards::create))
        .route(
            "/api/cards",
            get(routes::cards::list).delete(routes::cards::clear_all),
        )
        .route("/api/stats", get(routes::cards::stats))
        .route("/api/categories", get(routes::cards::categories))
        // Topic routes
        .route("/api/topics", get(routes::topics::list))
        .route("/api/topics/load", post(routes::topics::load))
        .route("/api/topics/sync", post(routes::topics::sync))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::require_session,
        ));

    Router::new()
        .route("/", get(routes::pages::index))
        .route("/health", get(health_check))
        .route(
            "/login",
            get(routes::auth::login_page).post(routes::auth::login),
        )
        .route("/logout", get(routes::auth::logout))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let addr = format!("{}:{}", config.host, config.port);

    let state = AppState {
        db: Arc::new(db),
        sessions: Arc::new(MemorySessionStore::default()),
        config: Arc::new(config),
    };

    let app = build_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
