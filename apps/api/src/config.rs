use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection string. Absent means caching is disabled.
    pub redis_url: Option<String>,
    /// Job source endpoint returning a JSON array of job postings.
    pub jobs_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: std::env::var("REDIS_URL").ok(),
            jobs_url: std::env::var("JOBS_URL")
                .unwrap_or_else(|_| "http://localhost:5001/api/jobs".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
