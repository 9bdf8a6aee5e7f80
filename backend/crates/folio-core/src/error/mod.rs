use crate::{ErrorLocation, RequiredField};

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required field: {field} {location}")]
    MissingField {
        field: RequiredField,
        location: ErrorLocation,
    },

    #[error("Invalid project id: '{value}' {location}")]
    InvalidId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid timestamp '{value}': {source} {location}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
