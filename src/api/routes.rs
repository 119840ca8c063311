//! API route configuration.

use crate::api::handlers::{
    delete_handler, expand_handler, health_handler, list_handler, redirect_handler,
    shorten_handler, update_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Every public route of the service.
///
/// # Endpoints
///
/// - `POST   /shorten`        - Create a short URL
/// - `GET    /expand/{code}`  - Original URL and creation time
/// - `GET    /urls`           - List every mapping
/// - `PUT    /update/{code}`  - Point a code at a new URL
/// - `DELETE /delete/{code}`  - Remove a mapping
/// - `GET    /r/{code}`       - 302 redirect to the original URL
/// - `GET    /health`         - Storage health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/expand/{code}", get(expand_handler))
        .route("/urls", get(list_handler))
        .route("/update/{code}", put(update_handler))
        .route("/delete/{code}", delete(delete_handler))
        .route("/r/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
}
