use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/connection",
            get(handlers::connection::get_connection)
                .post(handlers::connection::connect)
                .delete(handlers::connection::disconnect),
        )
        .route("/api/connection/demo", post(handlers::connection::enable_demo))
        .route("/api/connect", get(handlers::connection::connect_from_link))
}
