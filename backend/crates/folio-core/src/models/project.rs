//! Project entity - a single portfolio entry.

use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};

/// Display position given to projects that do not specify one
pub const DEFAULT_ORDER_INDEX: i64 = 0;

/// A portfolio project as persisted in the `projects` table.
///
/// `id` and `created_at` never change once assigned. `updated_at` only moves
/// forward; see [`Project::next_updated_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    /// Display ordering only, ascending
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Parse a project id from request input.
    ///
    /// Accepts a base-10 signed integer, ignoring surrounding whitespace.
    #[track_caller]
    pub fn parse_id(raw: &str) -> CoreResult<i64> {
        raw.trim().parse::<i64>().map_err(|_| CoreError::InvalidId {
            value: raw.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Timestamp to record for a mutation happening at `now`.
    ///
    /// Never earlier than one millisecond after the current `updated_at`, so
    /// two updates inside the same millisecond still move it forward.
    pub fn next_updated_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.max(self.updated_at + Duration::milliseconds(1))
    }
}
