use crate::tests::{fixed_time, sample_project};
use crate::{CoreError, Project};

use chrono::Duration;
use googletest::prelude::*;

#[test]
fn given_plain_integer_when_parse_id_then_ok() {
    assert_eq!(Project::parse_id("42").unwrap(), 42);
}

#[test]
fn given_padded_integer_when_parse_id_then_whitespace_ignored() {
    assert_eq!(Project::parse_id("  17 ").unwrap(), 17);
}

#[test]
fn given_non_numeric_when_parse_id_then_invalid_id() {
    let result = Project::parse_id("abc");

    assert!(matches!(result, Err(CoreError::InvalidId { ref value, .. }) if value == "abc"));
}

#[test]
fn given_trailing_garbage_when_parse_id_then_invalid_id() {
    assert!(Project::parse_id("12abc").is_err());
    assert!(Project::parse_id("").is_err());
    assert!(Project::parse_id("1.5").is_err());
}

#[test]
fn given_later_now_when_next_updated_at_then_now_is_used() {
    let project = sample_project();
    let later = fixed_time() + Duration::seconds(5);

    assert_that!(project.next_updated_at(later), eq(later));
}

#[test]
fn given_same_millisecond_when_next_updated_at_then_still_advances() {
    let project = sample_project();

    let next = project.next_updated_at(fixed_time());

    assert_that!(next, eq(fixed_time() + Duration::milliseconds(1)));
}

#[test]
fn given_clock_behind_when_next_updated_at_then_never_goes_back() {
    let project = sample_project();
    let earlier = fixed_time() - Duration::hours(1);

    assert!(project.next_updated_at(earlier) > project.updated_at);
}
