//! Handlers for mapping management endpoints (expand, list, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::mapping::{ExpandResponse, MappingListItem};
use crate::api::dto::update::{MessageResponse, UpdateRequest};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL and creation time of a short code.
///
/// # Endpoint
///
/// `GET /expand/{code}`
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://www.example.com/United_Kingdom/London/Population",
///   "created_at": "2024-03-01T12:02:00"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn expand_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ExpandResponse>, AppError> {
    let mapping = state.mapping_service.expand(&code).await?;

    Ok(Json(ExpandResponse {
        original_url: mapping.original_url,
        created_at: mapping.created_at,
    }))
}

/// Lists every mapping, oldest first.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Response
///
/// ```json
/// [
///   {
///     "short_code": "Zh8Qkr",
///     "short_url": "http://127.0.0.1:3000/r/Zh8Qkr",
///     "original_url": "https://www.google.com",
///     "created_at": "2024-03-01T12:02:00"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 404 Not Found when no mappings exist.
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MappingListItem>>, AppError> {
    let service = &state.mapping_service;
    let mappings = service.list_all().await?;

    if mappings.is_empty() {
        return Err(AppError::not_found("No details found"));
    }

    let items = mappings
        .into_iter()
        .map(|mapping| MappingListItem {
            short_url: service.short_url(&mapping.short_code),
            short_code: mapping.short_code,
            original_url: mapping.original_url,
            created_at: mapping.created_at,
        })
        .collect();

    Ok(Json(items))
}

/// Points an existing short code at a new URL.
///
/// # Endpoint
///
/// `PUT /update/{code}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com/United_Kingdom/London/Population/v2" }
/// ```
///
/// `created_at` is left unchanged.
///
/// # Errors
///
/// Returns 400 Bad Request if the new URL is missing or invalid.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn update_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let url = payload.url.unwrap_or_default();

    state.mapping_service.update(&code, &url).await?;

    Ok(Json(MessageResponse::new("Updated successfully")))
}

/// Deletes a short code.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// Responds `204 No Content` with an empty body.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.mapping_service.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
