use crate::tests::sample_project;
use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits, ProjectQuery};

use googletest::prelude::{assert_that, eq, none, some};
use proptest::prelude::*;

fn query(limit: Option<&str>, offset: Option<&str>, search: Option<&str>) -> ProjectQuery {
    ProjectQuery::from_params(limit, offset, search, PageLimits::default())
}

#[test]
fn given_no_params_when_built_then_defaults_apply() {
    let q = query(None, None, None);

    assert_that!(q.limit, eq(DEFAULT_PAGE_SIZE));
    assert_that!(q.offset, eq(0));
    assert_that!(q.search, none());
}

#[test]
fn given_limit_above_cap_when_built_then_clamped() {
    assert_that!(query(Some("500"), None, None).limit, eq(MAX_PAGE_SIZE));
}

#[test]
fn given_malformed_limit_when_built_then_default_used() {
    assert_that!(query(Some("lots"), None, None).limit, eq(DEFAULT_PAGE_SIZE));
}

#[test]
fn given_negative_values_when_built_then_clamped_to_zero() {
    let q = query(Some("-5"), Some("-20"), None);

    assert_that!(q.limit, eq(0));
    assert_that!(q.offset, eq(0));
}

#[test]
fn given_malformed_offset_when_built_then_zero() {
    assert_that!(query(None, Some("x"), None).offset, eq(0));
    assert_that!(query(None, Some("15"), None).offset, eq(15));
}

#[test]
fn given_blank_search_when_built_then_no_filter() {
    assert_that!(query(None, None, Some("   ")).search, none());
    assert_that!(
        query(None, None, Some("bot")).search.as_deref(),
        some(eq("bot"))
    );
}

#[test]
fn given_configured_limits_when_built_then_they_apply() {
    let limits = PageLimits {
        default_size: 3,
        max_size: 5,
    };

    assert_that!(
        ProjectQuery::from_params(None, None, None, limits).limit,
        eq(3)
    );
    assert_that!(
        ProjectQuery::from_params(Some("9"), None, None, limits).limit,
        eq(5)
    );
}

#[test]
fn given_search_when_matching_then_title_description_and_category_are_checked() {
    let project = sample_project();

    assert!(query(None, None, Some("TRADING BOT")).matches(&project));
    assert!(query(None, None, Some("backtested")).matches(&project));
    assert!(query(None, None, Some("trad")).matches(&project));
    assert!(!query(None, None, Some("e-commerce")).matches(&project));
}

#[test]
fn given_project_without_category_when_matching_then_only_text_fields_count() {
    let mut project = sample_project();
    project.title = "Market Bot".to_string();
    project.description = "Backtested strategy runner".to_string();
    assert!(query(None, None, Some("trading")).matches(&project));

    project.category = None;

    assert!(!query(None, None, Some("trading")).matches(&project));
    assert!(query(None, None, None).matches(&project));
}

proptest! {
    #[test]
    fn limit_never_exceeds_cap(raw in any::<i64>()) {
        let q = query(Some(&raw.to_string()), None, None);

        prop_assert!(q.limit >= 0);
        prop_assert!(q.limit <= MAX_PAGE_SIZE);
        prop_assert!(q.limit <= raw.max(0));
    }

    #[test]
    fn offset_is_never_negative(raw in ".{0,12}") {
        prop_assert!(query(None, Some(&raw), None).offset >= 0);
    }
}
