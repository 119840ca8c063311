//! Core domain entities.
//!
//! - [`Mapping`] - A short code bound to an original URL
//! - [`NewMapping`] - Input for creating a mapping

pub mod mapping;

pub use mapping::{Mapping, NewMapping, utc_now};
