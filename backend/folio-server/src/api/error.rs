//! REST API error types
//!
//! Every failure leaves the handler as `{ "error": ..., "code": ... }`.
//! Internal errors carry no code and embed the underlying message.

use folio_core::{CoreError, RequiredField};
use folio_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Valid ID is required";
pub const NOT_FOUND_MESSAGE: &str = "Project not found";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or non-integer `id` (400)
    #[error("Invalid id {location}")]
    InvalidId { location: ErrorLocation },

    /// No project with the requested id (404)
    #[error("Project not found {location}")]
    NotFound { location: ErrorLocation },

    /// Required text field blank after trimming (400)
    #[error("Missing required field: {field} {location}")]
    MissingField {
        field: RequiredField,
        location: ErrorLocation,
    },

    /// Body is not JSON or has wrongly typed fields (400)
    #[error("Invalid request body: {message} {location}")]
    InvalidBody {
        message: String,
        location: ErrorLocation,
    },

    /// Anything else (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn invalid_id() -> Self {
        ApiError::InvalidId {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found() -> Self {
        ApiError::NotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId { .. }
            | ApiError::MissingField { .. }
            | ApiError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log with location; clients never see it.
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::InvalidId { .. } => ApiErrorBody {
                error: INVALID_ID_MESSAGE.into(),
                code: Some("INVALID_ID"),
            },
            ApiError::NotFound { .. } => ApiErrorBody {
                error: NOT_FOUND_MESSAGE.into(),
                code: Some("PROJECT_NOT_FOUND"),
            },
            ApiError::MissingField { field, .. } => ApiErrorBody {
                error: field.message().into(),
                code: Some(field.code()),
            },
            ApiError::InvalidBody { message, .. } => ApiErrorBody {
                error: format!("Invalid request body: {message}"),
                code: Some("INVALID_BODY"),
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                error: format!("Internal server error: {message}"),
                code: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::MissingField { field, .. } => ApiError::MissingField { field, location },
            CoreError::InvalidId { .. } => ApiError::InvalidId { location },
            CoreError::InvalidTimestamp { value, source, .. } => ApiError::Internal {
                message: format!("invalid timestamp '{value}': {source}"),
                location,
            },
        }
    }
}

/// Store failures become 500s carrying the driver message, not our location.
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let message = match e {
            DbError::Sqlx { source, .. } => source.to_string(),
            DbError::Migration { message, .. } => message,
            DbError::Decode { table, message, .. } => {
                format!("corrupt row in {table}: {message}")
            }
        };
        ApiError::Internal {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
