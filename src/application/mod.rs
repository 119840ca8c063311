//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI one place to validate input and apply the mapping lifecycle rules.
//!
//! - [`services::mapping_service::MappingService`] - Shorten, expand, list, update, delete
pub mod services;
