pub mod catalog;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::SqliteKeyValue;
use vocab_core::ReviewService;

/// Shared application state.
///
/// One mutex serializes every store operation: the core performs
/// whole-record read-modify-writes with no transactional guarantee, so
/// concurrent writers on the same record would lose updates.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Mutex<ReviewService<SqliteKeyValue>>>,
}

impl AppState {
    pub fn new(service: ReviewService<SqliteKeyValue>) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Study routes
        .route("/api/study/next", get(routes::study::next))
        .route("/api/study/answer", post(routes::study::answer))
        // Settings routes
        .route(
            "/api/settings",
            get(routes::settings::get).put(routes::settings::update),
        )
        // Stats routes
        .route("/api/stats", get(routes::stats::get))
        // Catalog routes
        .route("/api/words", get(routes::words::list))
        .with_state(state)
}

fn get_db_path() -> PathBuf {
    // Use the platform data directory unless KARTU_DATA_DIR overrides it.
    std::env::var("KARTU_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("kartubahasa")
        })
        .join("kartu.db")
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = get_db_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!("Opening store at {}", db_path.display());
    let store = SqliteKeyValue::open(&db_path)?;
    let service = ReviewService::new(catalog::builtin_catalog(), store);

    let app = router(AppState::new(service))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
