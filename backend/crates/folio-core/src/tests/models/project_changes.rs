use crate::tests::{fixed_time, sample_project};
use crate::{CoreError, ProjectChanges, RequiredField};

use chrono::Duration;
use googletest::prelude::*;

#[test]
fn given_no_changes_when_applied_then_only_updated_at_moves() {
    let project = sample_project();
    let changes = ProjectChanges::default();
    let now = fixed_time() + Duration::minutes(1);

    let updated = changes.apply(&project, now).unwrap();

    assert_that!(updated.updated_at, eq(now));
    assert_that!(updated.title, eq(&project.title));
    assert_that!(updated.category, eq(&project.category));
    assert_that!(updated.created_at, eq(project.created_at));
}

#[test]
fn given_category_only_when_applied_then_other_fields_unchanged() {
    let project = sample_project();
    let changes = ProjectChanges {
        category: Some(Some("Automation".to_string())),
        ..Default::default()
    };

    let updated = changes.apply(&project, fixed_time()).unwrap();

    assert_that!(updated.category.as_deref(), some(eq("Automation")));
    assert_that!(updated.title, eq(&project.title));
    assert_that!(updated.description, eq(&project.description));
    assert_that!(updated.url, eq(&project.url));
    assert_that!(updated.image_url, eq(&project.image_url));
    assert_that!(updated.order_index, eq(project.order_index));
    assert_that!(updated.id, eq(project.id));
}

#[test]
fn given_explicit_null_when_applied_then_nullable_fields_cleared() {
    let project = sample_project();
    let changes = ProjectChanges {
        image_url: Some(None),
        category: Some(None),
        order_index: Some(None),
        ..Default::default()
    };

    let updated = changes.apply(&project, fixed_time()).unwrap();

    assert_that!(updated.image_url, none());
    assert_that!(updated.category, none());
    assert_that!(updated.order_index, eq(0));
}

#[test]
fn given_blank_category_when_applied_then_cleared() {
    let project = sample_project();
    let changes = ProjectChanges {
        category: Some(Some("   ".to_string())),
        ..Default::default()
    };

    let updated = changes.apply(&project, fixed_time()).unwrap();

    assert_that!(updated.category, none());
}

#[test]
fn given_padded_title_when_applied_then_trimmed() {
    let project = sample_project();
    let changes = ProjectChanges {
        title: Some("  Renamed  ".to_string()),
        order_index: Some(Some(12)),
        ..Default::default()
    };

    let updated = changes.apply(&project, fixed_time()).unwrap();

    assert_that!(updated.title.as_str(), eq("Renamed"));
    assert_that!(updated.order_index, eq(12));
}

#[test]
fn given_blank_url_when_applied_then_rejected() {
    let project = sample_project();
    let changes = ProjectChanges {
        title: Some("Fine".to_string()),
        url: Some("  ".to_string()),
        ..Default::default()
    };

    let result = changes.apply(&project, fixed_time());

    assert!(matches!(
        result,
        Err(CoreError::MissingField {
            field: RequiredField::Url,
            ..
        })
    ));
}

#[test]
fn given_repeated_updates_in_same_instant_then_updated_at_strictly_increases() {
    let project = sample_project();
    let changes = ProjectChanges {
        title: Some("Again".to_string()),
        ..Default::default()
    };

    let first = changes.apply(&project, fixed_time()).unwrap();
    let second = changes.apply(&first, fixed_time()).unwrap();

    assert!(first.updated_at > project.updated_at);
    assert!(second.updated_at > first.updated_at);
    assert_that!(second.created_at, eq(project.created_at));
}

#[test]
fn given_raw_changes_when_normalized_then_values_are_ready_to_store() {
    let changes = ProjectChanges {
        title: Some("  Renamed  ".to_string()),
        image_url: Some(Some(" ".to_string())),
        category: Some(Some(" Web ".to_string())),
        order_index: Some(None),
        ..Default::default()
    };

    let normalized = changes.normalized().unwrap();

    assert_that!(normalized.title.as_deref(), some(eq("Renamed")));
    assert_that!(normalized.description, none());
    assert_that!(normalized.url, none());
    assert_that!(normalized.image_url, some(none()));
    assert_that!(normalized.category, some(some(eq("Web"))));
    assert_that!(normalized.order_index, some(some(eq(0))));
}

#[test]
fn given_blank_title_when_normalized_then_rejected() {
    let changes = ProjectChanges {
        title: Some(" ".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        changes.normalized(),
        Err(CoreError::MissingField {
            field: RequiredField::Title,
            ..
        })
    ));
}
