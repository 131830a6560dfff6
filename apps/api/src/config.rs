use anyhow::{Context, Result};

const DEFAULT_CHAT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL of the resume assistant backend (serves `POST /chat/`).
    pub chat_backend_url: String,
    pub chat_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            chat_backend_url: std::env::var("CHAT_BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_CHAT_BACKEND_URL.to_string()),
            chat_timeout_secs: std::env::var("CHAT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("CHAT_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}
