//! # Connection configuration
//!
//! Which backend the dashboard reads from. The configuration is an ordinary
//! value owned by whoever serves the dashboard and handed to the store on
//! every call, so tests can build any combination directly.
//!
//! ## Environment Variables
//!
//! - `MINISTRY_BACKEND_URL`: Apps Script URL fixed for this deployment. When
//!   set, the connection cannot be replaced or removed at runtime.
//! - `MINISTRY_DEMO_MODE`: `true` serves the demo fixture when no URL is fixed.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use ministry_core::errors::{MinistryError, MinistryResult};
use reqwest::Client;
use serde::Serialize;

use crate::ScheduleBackend;
use crate::demo::DemoBackend;
use crate::http::HttpBackend;

/// Marker every deployed Apps Script URL contains.
pub const SCRIPT_HOST_MARKER: &str = "script.google.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ConnectionMode {
    Disconnected,
    Remote { url: String },
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub mode: ConnectionMode,
    /// The URL was fixed at deploy time and cannot be changed.
    pub hardcoded: bool,
}

impl ConnectionConfig {
    pub fn disconnected() -> Self {
        Self { mode: ConnectionMode::Disconnected, hardcoded: false }
    }

    pub fn demo() -> Self {
        Self { mode: ConnectionMode::Demo, hardcoded: false }
    }

    /// A deployment-fixed URL. Blank input yields a disconnected config.
    pub fn hardcoded(url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() {
            return Self::disconnected();
        }
        Self {
            mode: ConnectionMode::Remote { url: url.to_string() },
            hardcoded: true,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup (the process
    /// environment in [`from_env`](Self::from_env)).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("MINISTRY_BACKEND_URL").filter(|url| !url.trim().is_empty()) {
            return Self::hardcoded(&url);
        }

        let demo = lookup("MINISTRY_DEMO_MODE")
            .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        if demo { Self::demo() } else { Self::disconnected() }
    }

    pub fn is_connected(&self) -> bool {
        self.mode != ConnectionMode::Disconnected
    }

    pub fn is_demo(&self) -> bool {
        self.mode == ConnectionMode::Demo
    }

    fn ensure_mutable(&self) -> MinistryResult<()> {
        if self.hardcoded {
            return Err(MinistryError::Configuration(
                "The backend URL is fixed for this deployment and cannot be changed".to_string(),
            ));
        }
        Ok(())
    }

    pub fn connect(&mut self, url: &str) -> MinistryResult<()> {
        self.ensure_mutable()?;

        let url = url.trim();
        if !url.contains(SCRIPT_HOST_MARKER) {
            return Err(MinistryError::Validation(format!(
                "Backend URL must be a deployed Apps Script URL ({})",
                SCRIPT_HOST_MARKER
            )));
        }

        tracing::info!("Connecting to backend {}", url);
        self.mode = ConnectionMode::Remote { url: url.to_string() };
        Ok(())
    }

    pub fn enable_demo(&mut self) -> MinistryResult<()> {
        self.ensure_mutable()?;
        tracing::info!("Switching to demo mode");
        self.mode = ConnectionMode::Demo;
        Ok(())
    }

    pub fn disconnect(&mut self) -> MinistryResult<()> {
        self.ensure_mutable()?;
        tracing::info!("Disconnecting from backend");
        self.mode = ConnectionMode::Disconnected;
        Ok(())
    }

    /// Applies a shared link's `key` or `source` parameter.
    ///
    /// A fixed URL always wins. Otherwise the first parameter that looks like
    /// an Apps Script URL becomes the connection. Returns whether a fixed URL
    /// or the link settled the connection.
    pub fn apply_link_params(&mut self, key: Option<&str>, source: Option<&str>) -> bool {
        if self.hardcoded {
            return true;
        }

        let candidate = [key, source]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty());

        match candidate {
            Some(url) if url.contains(SCRIPT_HOST_MARKER) => {
                tracing::info!("Connection configured from shared link");
                self.mode = ConnectionMode::Remote { url: url.to_string() };
                true
            }
            _ => false,
        }
    }

    /// Instantiates the backend this configuration points at.
    pub fn backend(&self, client: &Client, demo_latency: Duration) -> MinistryResult<Arc<dyn ScheduleBackend>> {
        match &self.mode {
            ConnectionMode::Disconnected => Err(MinistryError::NotConnected),
            ConnectionMode::Remote { url } => Ok(Arc::new(HttpBackend::new(client.clone(), url.clone()))),
            ConnectionMode::Demo => Ok(Arc::new(DemoBackend::new(demo_latency))),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::disconnected()
    }
}
