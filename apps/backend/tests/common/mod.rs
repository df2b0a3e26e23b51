//! Common test utilities and fixtures for integration tests.
//!
//! Every context runs against an in-memory SQLite store and a fixed RNG
//! seed, so tests are self-contained and draws are reproducible.

pub mod fixtures;

use axum::Router;

use kartubahasa_backend::db::SqliteKeyValue;
use kartubahasa_backend::{router, AppState};
use vocab_core::{Noun, ReviewService};

pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Context over the small fixture catalog.
    pub fn new() -> Self {
        Self::with_catalog(fixtures::sample_catalog())
    }

    pub fn with_catalog(catalog: Vec<Noun>) -> Self {
        let store = SqliteKeyValue::open_in_memory().expect("in-memory store");
        let service = ReviewService::with_seed(catalog, store, 0xC0FFEE);
        Self {
            app: router(AppState::new(service)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
