//! DTOs for the update endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::url_validator::validate_http_url;

/// Request body for `PUT /update/{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRequest {
    /// New destination URL for this short code.
    #[validate(
        required(message = "Invalid URL format"),
        custom(function = "validate_http_url")
    )]
    pub url: Option<String>,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
