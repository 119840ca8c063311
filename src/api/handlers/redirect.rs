//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL, byte for byte, when it
/// is plain ASCII. Otherwise the URL parser's serialization is sent: the host
/// in punycode, path and query percent-encoded.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.mapping_service.expand(&code).await?;
    debug!(short_code = %mapping.short_code, "Redirecting");

    let location = location_header(&mapping.original_url)?;
    metrics::counter!("urlmap_redirects_total").increment(1);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    // Location must be ASCII; IRIs go out in their URI form.
    if original_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original_url)
    {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(format!("Stored URL is not a valid Location header: {original_url}"))
        })
}
