//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::url_validator::validate_http_url;

/// Request to shorten a single URL.
///
/// `url` is optional at the serde level so a missing field surfaces as a
/// validation error (400) rather than a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[validate(
        required(message = "Invalid URL format"),
        custom(function = "validate_http_url")
    )]
    pub url: Option<String>,
}

/// Response for a newly created mapping.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
