//! Application configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Empty means the app runs without a password gate.
    pub app_password: String,
    /// Directory scanned for importable `*.csv` vocabulary topics.
    pub vocab_dir: PathBuf,
    /// Directory holding the frontend `index.html`.
    pub static_dir: PathBuf,
    /// Debug builds skip the Secure cookie attribute for local http.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://vietcards.db".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            app_password: env::var("APP_PASSWORD").unwrap_or_default(),
            vocab_dir: env::var("VOCAB_DIR")
                .unwrap_or_else(|_| "vocab".to_string())
                .into(),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
            debug: env::var("DEBUG")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Password gating is on only when a password is configured.
    pub fn auth_enabled(&self) -> bool {
        !self.app_password.is_empty()
    }
}
