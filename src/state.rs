//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::domain::repositories::MappingRepository;

/// Service handle shared across requests.
///
/// Built once at startup by [`crate::server::run`] (or by tests) and cloned
/// cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService<dyn MappingRepository>>,
}

impl AppState {
    /// Creates state around a configured mapping service.
    pub fn new(mapping_service: Arc<MappingService<dyn MappingRepository>>) -> Self {
        Self { mapping_service }
    }

    /// Convenience constructor wiring a repository straight into a service.
    pub fn with_repository(
        repository: Arc<dyn MappingRepository>,
        base_url: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self::new(Arc::new(MappingService::new(
            repository,
            base_url,
            code_length,
        )))
    }
}
