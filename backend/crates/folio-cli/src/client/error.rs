use folio_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// Rejected before any request was sent
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Invalid server URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Prompt error: {message} {location}")]
    Prompt {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, code: String, message: String) -> Self {
        ClientError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: &str, err: impl std::fmt::Display) -> Self {
        ClientError::InvalidUrl {
            url: url.to_string(),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Server-side error code, if the server sent one
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<dialoguer::Error> for ClientError {
    #[track_caller]
    fn from(err: dialoguer::Error) -> Self {
        ClientError::Prompt {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Client-side required-field check uses the server's wording
impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingField { field, .. } => ClientError::Validation {
                field: field.as_str(),
                message: field.message().to_string(),
            },
            other => ClientError::Validation {
                field: "unknown",
                message: other.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
