//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;
use crate::utils::url_validator::INVALID_URL_MESSAGE;

/// JSON body that has been deserialized and passed `validator` checks.
///
/// Any rejection (missing `Content-Type`, malformed JSON, wrong field types)
/// and any validation failure becomes [`AppError::Validation`], so clients
/// always receive a 400 with an `{"error": ...}` body. Rejection details are
/// logged, never echoed back.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(ValidatedJson(payload): ValidatedJson<ShortenRequest>) { ... }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(
                    status = %rejection.status(),
                    reason = %rejection.body_text(),
                    "Rejected JSON body"
                );
                AppError::bad_request(INVALID_URL_MESSAGE)
            })?;

        value.validate()?;

        Ok(Self(value))
    }
}
