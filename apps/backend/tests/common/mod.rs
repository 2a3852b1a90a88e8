//! Common test utilities and fixtures for integration tests.
//!
//! Every TestContext owns a fresh in-memory SQLite database, so tests are
//! fully independent and need no external services.

pub mod fixtures;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;

use vietcards_backend::config::Config;
use vietcards_backend::db::Database;
use vietcards_backend::models::{Card, CardCreate};
use vietcards_backend::services::session::MemorySessionStore;
use vietcards_backend::{build_router, AppState};

/// Test context wrapping an application router and its database.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Context with the password gate disabled and the default vocab dir.
    pub async fn new() -> Self {
        Self::build(None, PathBuf::from("vocab")).await
    }

    /// Context with a password gate enabled.
    pub async fn with_password(password: &str) -> Self {
        Self::build(Some(password), PathBuf::from("vocab")).await
    }

    /// Context reading vocabulary topics from a specific directory.
    pub async fn with_vocab_dir(vocab_dir: &Path) -> Self {
        Self::build(None, vocab_dir.to_path_buf()).await
    }

    async fn build(password: Option<&str>, vocab_dir: PathBuf) -> Self {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            app_password: password.unwrap_or_default().to_string(),
            vocab_dir,
            static_dir: PathBuf::from("static"),
            debug: true,
        };

        let state = AppState {
            db: db.clone(),
            sessions: Arc::new(MemorySessionStore::default()),
            config: Arc::new(config),
        };

        let app = build_router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Insert a card directly through the database layer.
    pub async fn create_card(
        &self,
        vietnamese: &str,
        english: &str,
        category: Option<&str>,
    ) -> Card {
        self.db
            .create_card(&CardCreate {
                vietnamese: vietnamese.to_string(),
                english: english.to_string(),
                category: category.map(str::to_string),
                difficulty_level: 1,
            })
            .await
            .expect("Failed to create test card")
    }
}

/// Extract the `session_token=...` cookie pair from a login response.
pub fn session_cookie(response: &axum_test::TestResponse) -> String {
    let set_cookie = response.header(axum::http::header::SET_COOKIE);
    let set_cookie = set_cookie.to_str().expect("set-cookie should be ascii");
    set_cookie
        .split(';')
        .next()
        .expect("set-cookie should have a name=value pair")
        .to_string()
}
