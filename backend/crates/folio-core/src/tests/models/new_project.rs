use crate::tests::fixed_time;
use crate::{CoreError, DEFAULT_ORDER_INDEX, NewProject, RequiredField};

use googletest::prelude::{assert_that, eq, none, some};
use proptest::prelude::*;

fn missing_field(result: crate::Result<NewProject>) -> Option<RequiredField> {
    match result {
        Err(CoreError::MissingField { field, .. }) => Some(field),
        _ => None,
    }
}

#[test]
fn given_padded_fields_when_new_then_values_are_trimmed() {
    let project = NewProject::new(Some("  A "), Some("\tB\n"), Some(" http://x ")).unwrap();

    assert_that!(project.title.as_str(), eq("A"));
    assert_that!(project.description.as_str(), eq("B"));
    assert_that!(project.url.as_str(), eq("http://x"));
    assert_that!(project.image_url, none());
    assert_that!(project.category, none());
    assert_that!(project.order_index, eq(DEFAULT_ORDER_INDEX));
}

#[test]
fn given_missing_title_when_new_then_title_reported() {
    let result = NewProject::new(None, Some("B"), Some("http://x"));

    assert_that!(missing_field(result), some(eq(RequiredField::Title)));
}

#[test]
fn given_blank_description_when_new_then_description_reported() {
    let result = NewProject::new(Some("A"), Some("   "), Some("http://x"));

    assert_that!(missing_field(result), some(eq(RequiredField::Description)));
}

#[test]
fn given_blank_url_when_new_then_url_reported() {
    let result = NewProject::new(Some("A"), Some("B"), Some(""));

    assert_that!(missing_field(result), some(eq(RequiredField::Url)));
}

#[test]
fn given_everything_blank_when_new_then_title_reported_first() {
    let result = NewProject::new(Some(""), None, Some(" "));

    assert_that!(missing_field(result), some(eq(RequiredField::Title)));
}

#[test]
fn given_blank_optionals_when_built_then_stored_as_none() {
    let project = NewProject::new(Some("A"), Some("B"), Some("C"))
        .unwrap()
        .with_image_url(Some("   "))
        .with_category(Some(""))
        .with_order_index(None);

    assert_that!(project.image_url, none());
    assert_that!(project.category, none());
    assert_that!(project.order_index, eq(0));
}

#[test]
fn given_optionals_when_built_then_trimmed_and_kept() {
    let project = NewProject::new(Some("A"), Some("B"), Some("C"))
        .unwrap()
        .with_image_url(Some(" https://img/x.png "))
        .with_category(Some(" Trading "))
        .with_order_index(Some(4));

    assert_that!(project.image_url.as_deref(), some(eq("https://img/x.png")));
    assert_that!(project.category.as_deref(), some(eq("Trading")));
    assert_that!(project.order_index, eq(4));
}

#[test]
fn given_new_project_when_into_project_then_timestamps_match() {
    let project = NewProject::new(Some("A"), Some("B"), Some("C"))
        .unwrap()
        .into_project(9, fixed_time());

    assert_that!(project.id, eq(9));
    assert_that!(project.created_at, eq(project.updated_at));
}

proptest! {
    #[test]
    fn valid_input_is_stored_trimmed(
        title in "[ \t]{0,3}[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}[ \t]{0,3}",
        description in "[ \t]{0,3}[a-z][a-z ]{0,40}[ \t]{0,3}",
        url in "[ ]{0,2}https://[a-z]{1,10}\\.dev[ ]{0,2}",
    ) {
        let project = NewProject::new(Some(&title), Some(&description), Some(&url)).unwrap();

        prop_assert_eq!(project.title, title.trim());
        prop_assert_eq!(project.description, description.trim());
        prop_assert_eq!(project.url, url.trim());
    }

    #[test]
    fn whitespace_only_title_is_always_rejected(title in "[ \t\r\n]{0,10}") {
        let result = NewProject::new(Some(&title), Some("B"), Some("C"));

        prop_assert_eq!(missing_field(result), Some(RequiredField::Title));
    }
}
