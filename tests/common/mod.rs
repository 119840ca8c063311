#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use urlmap::domain::entities::{Mapping, NewMapping};
use urlmap::domain::repositories::MappingRepository;
use urlmap::error::AppError;
use urlmap::infrastructure::persistence::MemoryMappingRepository;
use urlmap::state::AppState;

pub const BASE_URL: &str = "http://127.0.0.1:3000";

pub fn create_test_state() -> (AppState, Arc<MemoryMappingRepository>) {
    let repository = Arc::new(MemoryMappingRepository::new());
    let state = AppState::with_repository(repository.clone(), BASE_URL, 6);

    (state, repository)
}

pub async fn create_test_mapping(repository: &MemoryMappingRepository, code: &str, url: &str) {
    repository
        .create(NewMapping {
            short_code: code.to_string(),
            original_url: url.to_string(),
        })
        .await
        .unwrap();
}

/// Extracts the short code from a `{BASE_URL}/r/{code}` short URL.
pub fn code_from_short_url(short_url: &str) -> String {
    short_url
        .strip_prefix(&format!("{BASE_URL}/r/"))
        .unwrap()
        .to_string()
}

/// Repository whose every call fails, for exercising storage outages.
pub struct UnavailableRepository;

#[async_trait]
impl MappingRepository for UnavailableRepository {
    async fn create(&self, _new_mapping: NewMapping) -> Result<Mapping, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_code(&self, _short_code: &str) -> Result<Option<Mapping>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn list_all(&self) -> Result<Vec<Mapping>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn update_url(
        &self,
        _short_code: &str,
        _original_url: &str,
    ) -> Result<Option<Mapping>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn delete(&self, _short_code: &str) -> Result<bool, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("connection refused"))
    }
}

pub fn create_unavailable_state() -> AppState {
    AppState::with_repository(Arc::new(UnavailableRepository), BASE_URL, 6)
}
