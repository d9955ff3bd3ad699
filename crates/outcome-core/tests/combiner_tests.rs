mod common;

use common::{assert_content, assert_successful, assert_unsuccessful, init_logging};
use outcome_core::{message::UNSUCCESSFUL_RESULT, Combiner, Outcome, Status};

fn validate_name(name: &str) -> Outcome<String> {
    if name.trim().is_empty() {
        Outcome::unprocessable_with("name must not be blank", &[])
    } else {
        Outcome::success_with(name.to_string())
    }
}

fn validate_age(age: u8) -> Outcome<String> {
    if age < 18 {
        Outcome::unprocessable_with("age %s is below 18", &[age.to_string().as_str()])
    } else {
        Outcome::success_with(age.to_string())
    }
}

#[test]
fn test_merge_all_successful() {
    init_logging();
    let merged = Outcome::<i32>::combine(Outcome::success_with(1))
        .with(Outcome::success_with(2))
        .and(Outcome::success_with(3))
        .merge();
    assert_successful(&merged);
    assert_eq!(merged.status(), Status::Success);
    assert_content(&merged, &vec![1, 2, 3]);
}

#[test]
fn test_sum_all_successful_drops_content() {
    init_logging();
    let summed = Outcome::<i32>::combine(Outcome::success_with(1))
        .with(Outcome::success_with(2))
        .and(Outcome::success_with(3))
        .sum();
    assert_eq!(summed.status(), Status::Success);
    assert!(summed.is_empty());
}

#[test]
fn test_merge_with_error() {
    init_logging();
    let merged = Outcome::<i32>::combine(Outcome::error_occurred("e1", &[]))
        .with(Outcome::success_with(2))
        .and(Outcome::success_with(3))
        .merge();
    assert_unsuccessful(&merged);
    assert_eq!(merged.status(), Status::Unprocessable);
    assert!(merged.content().is_none());
    assert!(merged.message().starts_with(UNSUCCESSFUL_RESULT));
    assert!(merged.message().contains("e1"));
}

#[test]
fn test_sum_with_error() {
    let summed = Outcome::<i32>::combine(Outcome::success_with(1))
        .with(Outcome::error_occurred("e2", &[]))
        .sum();
    assert_eq!(summed.status(), Status::Unprocessable);
    assert!(summed.is_empty());
    assert!(summed.message().contains("e2"));
}

#[test]
fn test_failure_messages_in_fold_order() {
    let merged = Outcome::combine(validate_name(" "))
        .with(validate_age(30))
        .and(validate_age(12))
        .and(Outcome::not_found_with("profile missing", &[]))
        .merge();
    assert_eq!(
        merged.message(),
        "At least one Result was not successful, message-1: name must not be blank, \
         message-2: age 12 is below 18, message-3: profile missing"
    );
}

#[test]
fn test_merge_skips_outcomes_without_content() {
    let merged = Outcome::<&str>::combine(Outcome::success())
        .with(Outcome::success_with("kept"))
        .and(Outcome::empty_resource())
        .and(Outcome::success_with(None))
        .merge();
    assert_eq!(merged.status(), Status::Success);
    assert_content(&merged, &vec!["kept"]);
}

#[test]
fn test_merge_without_any_content_is_empty_list() {
    let merged = Outcome::<u8>::combine(Outcome::success()).merge();
    assert_eq!(merged.status(), Status::Success);
    assert_content(&merged, &Vec::new());
}

#[test]
fn test_collect_validations() {
    init_logging();
    let combiner: Combiner<String> = ["ann", "bea", ""].into_iter().map(validate_name).collect();
    assert!(!combiner.is_all_successful());
    assert_eq!(combiner.collected_len(), 2);
    assert_eq!(combiner.failure_count(), 1);

    let merged = combiner.merge();
    assert_eq!(merged.status(), Status::Unprocessable);
    assert!(merged.message().ends_with("message-1: name must not be blank"));
}

#[test]
fn test_seeded_combiner_extends() {
    let mut combiner = Combiner::new(validate_name("cy"));
    combiner.extend([validate_age(40), validate_age(50)]);
    let merged = combiner.merge();
    assert_content(
        &merged,
        &vec!["cy".to_string(), "40".to_string(), "50".to_string()],
    );
}
