#![allow(dead_code)]

use std::fmt::Debug;

use outcome_core::Outcome;

/// Route `log` output through `env_logger` so `RUST_LOG=trace` shows what the
/// library records during a test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert that the outcome is successful.
#[track_caller]
pub fn assert_successful<T: Debug>(outcome: &Outcome<T>) {
    assert!(
        outcome.is_successful(),
        "Expected outcome to be successful, got {outcome:?}"
    );
}

/// Assert that the outcome is unsuccessful.
#[track_caller]
pub fn assert_unsuccessful<T: Debug>(outcome: &Outcome<T>) {
    assert!(
        outcome.is_unsuccessful(),
        "Expected outcome to be unsuccessful, got {outcome:?}"
    );
}

/// Assert that the outcome carries exactly `expected`.
#[track_caller]
pub fn assert_content<T: Debug + PartialEq>(outcome: &Outcome<T>, expected: &T) {
    match outcome.content() {
        Some(content) => assert_eq!(content, expected, "Unexpected outcome content"),
        None => panic!("Expected outcome to have content but it was empty: {outcome:?}"),
    }
}

/// Assert that the outcome's message equals `expected`.
#[track_caller]
pub fn assert_message<T>(outcome: &Outcome<T>, expected: &str) {
    assert_eq!(outcome.message(), expected, "Unexpected outcome message");
}
