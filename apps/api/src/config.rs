use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Read once at startup and never mutated afterward.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API credential. Deliberately not validated here: a missing
    /// key surfaces as the provider's authentication error on first use.
    pub google_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: std::env::var("GOOGLE_API_KEY").unwrap_or_default(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
