//! Central module for application-wide configuration settings.
//!
//! Loads the session storage location, the simulated login latency and the
//! HTTP port from the environment (optionally seeded from a `.env` file).

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub login_latency_ms: u64,
    pub server_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let storage_dir = env::var("PORTAL_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".phc-portal"));

        let login_latency_ms = env::var("LOGIN_LATENCY_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse::<u64>()
            .context("LOGIN_LATENCY_MS must be a valid number")?;

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        Ok(Config {
            storage_dir,
            login_latency_ms,
            server_port,
        })
    }

    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }
}
