use crate::ApiError;

use folio_core::{CoreError, RequiredField};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_id_returns_400_with_code() {
    let (status, json) = body_json(ApiError::invalid_id()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Valid ID is required");
    assert_eq!(json["code"], "INVALID_ID");
}

#[tokio::test]
async fn test_not_found_returns_404_with_code() {
    let (status, json) = body_json(ApiError::not_found()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Project not found");
    assert_eq!(json["code"], "PROJECT_NOT_FOUND");
}

#[tokio::test]
async fn test_missing_field_uses_field_specific_code() {
    let cases = [
        (RequiredField::Title, "MISSING_TITLE", "Title is required and cannot be empty"),
        (
            RequiredField::Description,
            "MISSING_DESCRIPTION",
            "Description is required and cannot be empty",
        ),
        (RequiredField::Url, "MISSING_URL", "URL is required and cannot be empty"),
    ];

    for (field, code, message) in cases {
        let error = ApiError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        };
        let (status, json) = body_json(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], code);
        assert_eq!(json["error"], message);
    }
}

#[tokio::test]
async fn test_internal_error_returns_500_without_code() {
    let (status, json) = body_json(ApiError::internal("disk I/O error")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error: disk I/O error");
    assert!(json.get("code").is_none());
}

#[tokio::test]
async fn test_body_never_contains_source_location() {
    let (_, json) = body_json(ApiError::internal("boom")).await;

    assert!(!json["error"].as_str().unwrap().contains(".rs"));
}

#[test]
fn test_core_invalid_id_maps_to_invalid_id() {
    let core = CoreError::InvalidId {
        value: "abc".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api = ApiError::from(core);

    assert!(matches!(api, ApiError::InvalidId { .. }));
    assert_eq!(api.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_core_missing_field_keeps_field() {
    let core = CoreError::MissingField {
        field: RequiredField::Url,
        location: ErrorLocation::from(Location::caller()),
    };

    let api = ApiError::from(core);

    assert!(matches!(
        api,
        ApiError::MissingField {
            field: RequiredField::Url,
            ..
        }
    ));
}

#[test]
fn test_db_error_maps_to_internal() {
    let db = folio_db::DbError::Migration {
        message: "checksum mismatch".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api = ApiError::from(db);

    match api {
        ApiError::Internal { message, .. } => assert_eq!(message, "checksum mismatch"),
        other => panic!("expected Internal, got {other:?}"),
    }
}
