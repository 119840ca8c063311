//! In-memory implementation of the mapping repository.
//!
//! Used with `STORAGE_BACKEND=memory` for local development and by the HTTP
//! integration tests. Contents are lost when the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Mapping, NewMapping, utc_now};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Process-local mapping store guarded by a `tokio` read-write lock.
#[derive(Debug, Default)]
pub struct MemoryMappingRepository {
    storage: RwLock<HashMap<String, Mapping>>,
}

impl MemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn create(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let mut storage = self.storage.write().await;

        if storage.contains_key(&new_mapping.short_code) {
            return Err(AppError::conflict(format!(
                "Short code '{}' already exists",
                new_mapping.short_code
            )));
        }

        let mapping = Mapping::new(
            new_mapping.short_code.clone(),
            new_mapping.original_url,
            utc_now(),
        );
        storage.insert(new_mapping.short_code, mapping.clone());

        Ok(mapping)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Mapping>, AppError> {
        Ok(self.storage.read().await.get(short_code).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Mapping>, AppError> {
        let mut mappings: Vec<Mapping> = self.storage.read().await.values().cloned().collect();
        mappings.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.short_code.cmp(&b.short_code))
        });

        Ok(mappings)
    }

    async fn update_url(
        &self,
        short_code: &str,
        original_url: &str,
    ) -> Result<Option<Mapping>, AppError> {
        let mut storage = self.storage.write().await;

        Ok(storage.get_mut(short_code).map(|mapping| {
            mapping.original_url = original_url.to_string();
            mapping.clone()
        }))
    }

    async fn delete(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.storage.write().await.remove(short_code).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.storage.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_mapping(code: &str, url: &str) -> NewMapping {
        NewMapping {
            short_code: code.to_string(),
            original_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryMappingRepository::new();

        let created = repo
            .create(new_mapping("abc123", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(created.short_code, "abc123");

        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = MemoryMappingRepository::new();
        assert!(repo.find_by_code("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let repo = MemoryMappingRepository::new();
        repo.create(new_mapping("abc123", "https://example.com"))
            .await
            .unwrap();

        let err = repo
            .create(new_mapping("abc123", "https://other.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));

        let kept = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(kept.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let repo = MemoryMappingRepository::new();
        let created = repo
            .create(new_mapping("abc123", "https://example.com/a"))
            .await
            .unwrap();

        let updated = repo
            .update_url("abc123", "https://example.com/b")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.original_url, "https://example.com/b");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = MemoryMappingRepository::new();
        let result = repo.update_url("nope", "https://example.com").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MemoryMappingRepository::new();
        repo.create(new_mapping("abc123", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.delete("abc123").await.unwrap());
        assert!(!repo.delete("abc123").await.unwrap());
        assert!(repo.find_by_code("abc123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_and_count() {
        let repo = MemoryMappingRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(new_mapping("bbb222", "https://example.com/2"))
            .await
            .unwrap();
        repo.create(new_mapping("aaa111", "https://example.com/1"))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].created_at <= all[1].created_at);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_creates_same_code() {
        let repo = Arc::new(MemoryMappingRepository::new());
        let mut handles = vec![];

        for i in 0..10 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_mapping("race01", &format!("https://example{i}.com")))
                    .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
