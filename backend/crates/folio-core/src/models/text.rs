//! Trimming rules shared by create and update.

use crate::{CoreError, ErrorLocation, RequiredField, Result as CoreResult};

use std::panic::Location;

/// Trim a required field; blank or missing input is rejected.
#[track_caller]
pub fn required(value: Option<&str>, field: RequiredField) -> CoreResult<String> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(CoreError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Trim an optional field; blank input collapses to `None`.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(String::from)
}
