//! Mapping lifecycle service: shorten, expand, list, update, delete.

use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_well_formed_code};
use crate::utils::url_validator::{INVALID_URL_MESSAGE, is_valid_url};

/// Message returned whenever a short code is unknown.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// How many generate-then-insert rounds [`MappingService::shorten`] attempts
/// before giving up on repeated storage conflicts.
pub const MAX_CREATE_ATTEMPTS: usize = 5;

/// Service owning every mutation of the mapping table.
///
/// Validates target URLs before they reach the store, generates collision-free
/// short codes, and renders public short URLs.
pub struct MappingService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
    code_length: usize,
}

impl<R: MappingRepository + ?Sized> MappingService<R> {
    /// Creates a new mapping service.
    ///
    /// `base_url` is the public prefix of short URLs; a trailing `/` is ignored.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>, code_length: usize) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            repository,
            base_url,
            code_length,
        }
    }

    /// Shortens `original_url` under a freshly generated code.
    ///
    /// # Conflict retry
    ///
    /// The uniqueness check in [`Self::generate_unique_code`] and the insert are
    /// not atomic, so a concurrent shorten can claim the same code in between.
    /// A [`AppError::Conflict`] from the store triggers a new code, up to
    /// [`MAX_CREATE_ATTEMPTS`] rounds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid.
    /// Returns [`AppError::Internal`] if every attempt conflicted or storage failed.
    pub async fn shorten(&self, original_url: &str) -> Result<Mapping, AppError> {
        ensure_valid_url(original_url)?;

        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            let short_code = self.generate_unique_code().await?;

            let new_mapping = NewMapping {
                short_code,
                original_url: original_url.to_string(),
            };

            match self.repository.create(new_mapping).await {
                Ok(mapping) => {
                    metrics::counter!("urlmap_mappings_created_total").increment(1);
                    tracing::info!(short_code = %mapping.short_code, "Mapping created");
                    return Ok(mapping);
                }
                Err(AppError::Conflict { message }) => {
                    tracing::warn!(attempt, %message, "Short code taken during insert, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(format!(
            "Failed to store a unique short code after {MAX_CREATE_ATTEMPTS} attempts"
        )))
    }

    /// Resolves a short code to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    pub async fn expand(&self, short_code: &str) -> Result<Mapping, AppError> {
        if !is_well_formed_code(short_code) {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Returns every stored mapping, oldest first. May be empty.
    pub async fn list_all(&self) -> Result<Vec<Mapping>, AppError> {
        self.repository.list_all().await
    }

    /// Points an existing short code at a new URL.
    ///
    /// The URL is validated before the store is touched, so an invalid URL is
    /// rejected even for unknown codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid.
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    pub async fn update(&self, short_code: &str, original_url: &str) -> Result<Mapping, AppError> {
        ensure_valid_url(original_url)?;

        if !is_well_formed_code(short_code) {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        let mapping = self
            .repository
            .update_url(short_code, original_url)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        metrics::counter!("urlmap_mappings_updated_total").increment(1);
        tracing::info!(short_code, "Mapping updated");

        Ok(mapping)
    }

    /// Deletes a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    pub async fn delete(&self, short_code: &str) -> Result<(), AppError> {
        if !is_well_formed_code(short_code) || !self.repository.delete(short_code).await? {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        metrics::counter!("urlmap_mappings_deleted_total").increment(1);
        tracing::info!(short_code, "Mapping deleted");

        Ok(())
    }

    /// Number of stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Public short URL for a code: `{base_url}/r/{code}`.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/r/{}", self.base_url, short_code)
    }

    /// Draws random codes until one is not present in the store.
    ///
    /// The loop has no attempt cap. With 62^6 possible codes the expected
    /// number of extra draws stays negligible for any realistic table size.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        loop {
            let code = generate_code(self.code_length);

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            tracing::debug!(code = %code, "Short code collision, drawing again");
        }
    }
}

fn ensure_valid_url(candidate: &str) -> Result<(), AppError> {
    if is_valid_url(candidate) {
        Ok(())
    } else {
        Err(AppError::bad_request(INVALID_URL_MESSAGE))
    }
}
