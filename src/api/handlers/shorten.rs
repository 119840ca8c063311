//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com/United_Kingdom/London/Population" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "short_url": "http://127.0.0.1:3000/r/ZRLmqg" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or not a valid http(s) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let url = payload.url.unwrap_or_default();

    let mapping = state.mapping_service.shorten(&url).await?;
    let short_url = state.mapping_service.short_url(&mapping.short_code);

    Ok((StatusCode::CREATED, Json(ShortenResponse { short_url })))
}
