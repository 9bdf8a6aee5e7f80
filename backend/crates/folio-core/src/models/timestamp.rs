//! Timestamps are kept at millisecond precision and rendered as RFC 3339 UTC
//! strings (`2024-01-01T00:00:00.000Z`), both on the wire and in storage.

use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::panic::Location;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Current time truncated to whole milliseconds.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[track_caller]
pub fn parse(value: &str) -> CoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| CoreError::InvalidTimestamp {
            value: value.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })
}
