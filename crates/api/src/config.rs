//! # API Configuration Module
//!
//! This module handles loading configuration for the dashboard service. It
//! retrieves values from environment variables and provides defaults where
//! appropriate. Which spreadsheet backend to read from is configured
//! separately, see `ministry_backend::connection`.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `ADMIN_PASSWORD`: Password unlocking the edit routes (default: "20261004")
//! - `DEMO_LATENCY_MS`: Simulated latency of the demo backend (default: 600)

use std::env;
use std::time::Duration;

use eyre::{Result, WrapErr};
use tracing::Level;

pub const DEFAULT_ADMIN_PASSWORD: &str = "20261004";

/// Configuration for the dashboard service
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use ministry_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting dashboard on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Plaintext password for the admin edit routes
    pub admin_password: String,

    /// Delay the demo backend adds to every call
    pub demo_latency: Duration,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if `API_PORT` or `DEMO_LATENCY_MS`
    /// cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .unwrap_or(30);

        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|password| !password.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());

        let demo_latency = lookup("DEMO_LATENCY_MS")
            .map(|ms| ms.trim().parse::<u64>())
            .transpose()
            .wrap_err("Invalid DEMO_LATENCY_MS value")?
            .map(Duration::from_millis)
            .unwrap_or(ministry_backend::demo::DEFAULT_DEMO_LATENCY);

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            admin_password,
            demo_latency,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
