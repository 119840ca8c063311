//! Mapping entity: a short code bound to its original URL.

use chrono::{NaiveDateTime, SubsecRound, Utc};

/// A persisted association between a short code and an original URL.
///
/// `created_at` is naive UTC at microsecond precision, matching what a
/// PostgreSQL `TIMESTAMP` column round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_code: String,
    pub original_url: String,
    pub created_at: NaiveDateTime,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(short_code: String, original_url: String, created_at: NaiveDateTime) -> Self {
        Self {
            short_code,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// `created_at` is assigned by the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub short_code: String,
    pub original_url: String,
}

/// Current UTC time truncated to microseconds.
pub fn utc_now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}
