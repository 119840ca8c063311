//! Repository trait for short code mappings.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for [`Mapping`] rows.
///
/// Every operation touches at most one row and is atomic at the row level.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping and returns it with its creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Mapping>, AppError>;

    /// Lists every mapping, oldest first.
    ///
    /// An empty store yields an empty vector, not an error.
    async fn list_all(&self) -> Result<Vec<Mapping>, AppError>;

    /// Replaces `original_url` of an existing mapping. `created_at` is untouched.
    ///
    /// Returns `Ok(None)` if no mapping has this short code.
    async fn update_url(
        &self,
        short_code: &str,
        original_url: &str,
    ) -> Result<Option<Mapping>, AppError>;

    /// Deletes a mapping.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the code was unknown.
    async fn delete(&self, short_code: &str) -> Result<bool, AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, AppError>;
}
