//! # Ministry Dashboard API
//!
//! The web service behind the ministry schedule dashboard. It serves the
//! computed dashboard view (stats, chart slices, notices, month groups) and
//! forwards edits to the spreadsheet backend.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: The admin gate and error mapping
//! - **Config**: Environment configuration
//!
//! The entry list is cached in a [`ScheduleStore`]; the backend it is loaded
//! from is chosen by the [`ConnectionConfig`] held in [`ApiState`].

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement the dashboard operations
pub mod handlers;
/// Admin gate and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use eyre::Result;
use ministry_backend::connection::ConnectionConfig;
use ministry_backend::store::ScheduleStore;
use ministry_backend::ScheduleBackend;
use ministry_core::errors::MinistryResult;
use ministry_core::models::schedule::ScheduleEntry;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::middleware::auth::AdminGate;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Which backend the dashboard reads from
    pub connection: RwLock<ConnectionConfig>,
    /// Local copy of the schedule list
    pub store: ScheduleStore,
    /// Password check for the edit routes
    pub admin: AdminGate,
    /// HTTP client reused by remote backends
    pub http_client: reqwest::Client,
    /// Delay the demo backend adds to every call
    pub demo_latency: Duration,
}

impl ApiState {
    pub fn new(connection: ConnectionConfig, admin: AdminGate, demo_latency: Duration) -> Self {
        Self {
            connection: RwLock::new(connection),
            store: ScheduleStore::new(),
            admin,
            http_client: reqwest::Client::new(),
            demo_latency,
        }
    }

    /// The backend the current connection points at.
    pub async fn backend(&self) -> MinistryResult<Arc<dyn ScheduleBackend>> {
        self.connection
            .read()
            .await
            .backend(&self.http_client, self.demo_latency)
    }

    /// Reloads the cache from the current backend.
    ///
    /// A missing connection is recorded on the store like any other load
    /// failure so the dashboard can show it.
    pub async fn reload(&self) -> MinistryResult<Vec<ScheduleEntry>> {
        match self.backend().await {
            Ok(backend) => self.store.refresh(backend.as_ref()).await,
            Err(err) => {
                tracing::warn!("Cannot load schedules: {}", err);
                self.store.record_error(&err).await;
                Err(err)
            }
        }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Dashboard view
        .merge(routes::dashboard::routes())
        // Schedule list and edits
        .merge(routes::schedule::routes())
        // Admin login
        .merge(routes::admin::routes())
        // Backend connection management
        .merge(routes::connection::routes())
        .with_state(state)
}

/// Starts the dashboard service
///
/// Sets up logging, loads the schedule list once, attaches the routes and
/// serves until the process is stopped. A failed initial load is not fatal;
/// the dashboard reports it and the list can be refreshed later.
pub async fn start_server(config: config::ApiConfig, connection: ConnectionConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(
        connection,
        AdminGate::new(config.admin_password.clone()),
        config.demo_latency,
    ));

    if let Err(err) = state.reload().await {
        tracing::warn!("Initial schedule load failed: {}", err);
    }

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse::<axum::http::HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect::<Vec<_>>();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static(middleware::auth::ADMIN_PASSWORD_HEADER),
            ])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Request logging and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Dashboard listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
