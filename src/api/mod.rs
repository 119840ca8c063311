//! HTTP API layer.
//!
//! Translates HTTP requests into mapping service calls and formats responses.
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - Validating JSON extractor
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
