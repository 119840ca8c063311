//! DTOs describing stored mappings.

use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

/// Response for `GET /expand/{code}`.
///
/// `created_at` serializes as ISO-8601 without an offset, e.g.
/// `2024-03-01T12:02:00.123456`.
#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub original_url: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,
}

/// One entry of the `GET /urls` listing.
#[derive(Debug, Serialize)]
pub struct MappingListItem {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,
}

/// Renders `YYYY-MM-DDTHH:MM:SS` plus a six-digit fraction when the
/// timestamp has sub-second precision.
fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let format = if timestamp.nanosecond() == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };

    serializer.serialize_str(&timestamp.format(format).to_string())
}
