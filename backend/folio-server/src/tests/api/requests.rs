use crate::{CreateProjectRequest, UpdateProjectRequest};

use folio_core::{ProjectChanges, RequiredField};

use serde_json::json;

#[test]
fn test_update_request_distinguishes_null_from_absent() {
    let request: UpdateProjectRequest = serde_json::from_value(json!({
        "category": null,
        "imageUrl": "https://img.example/x.png",
    }))
    .unwrap();

    let changes = ProjectChanges::from(request);

    assert_eq!(changes.category, Some(None));
    assert_eq!(
        changes.image_url,
        Some(Some("https://img.example/x.png".to_string()))
    );
    assert_eq!(changes.order_index, None);
    assert_eq!(changes.title, None);
}

#[test]
fn test_update_request_null_order_index_resets() {
    let request: UpdateProjectRequest =
        serde_json::from_value(json!({ "orderIndex": null })).unwrap();

    assert_eq!(request.order_index, Some(None));
}

#[test]
fn test_update_request_null_title_is_absent() {
    let request: UpdateProjectRequest = serde_json::from_value(json!({ "title": null })).unwrap();

    assert_eq!(ProjectChanges::from(request), ProjectChanges::default());
}

#[test]
fn test_update_request_rejects_wrong_types() {
    let result = serde_json::from_value::<UpdateProjectRequest>(json!({ "orderIndex": "first" }));

    assert!(result.is_err());
}

#[test]
fn test_create_request_reports_first_missing_field() {
    let request: CreateProjectRequest =
        serde_json::from_value(json!({ "title": "A", "url": "http://x" })).unwrap();

    let err = request.into_new_project().unwrap_err();

    assert!(matches!(
        err,
        folio_core::CoreError::MissingField {
            field: RequiredField::Description,
            ..
        }
    ));
}

#[test]
fn test_create_request_normalises_optional_fields() {
    let request: CreateProjectRequest = serde_json::from_value(json!({
        "title": "  A  ",
        "description": "B",
        "url": "http://x",
        "category": "   ",
        "imageUrl": " https://img.example/a.png ",
    }))
    .unwrap();

    let project = request.into_new_project().unwrap();

    assert_eq!(project.title, "A");
    assert_eq!(project.category, None);
    assert_eq!(
        project.image_url.as_deref(),
        Some("https://img.example/a.png")
    );
    assert_eq!(project.order_index, 0);
}
