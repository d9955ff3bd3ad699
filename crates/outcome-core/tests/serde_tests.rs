#![cfg(feature = "serde")]

use outcome_core::{Outcome, Status};
use serde_json::json;

#[test]
fn test_status_serializes_as_snake_case() {
    let value = serde_json::to_value(Status::EmptyResource).expect("Failed to serialize status");
    assert_eq!(value, json!("empty_resource"));

    let status: Status =
        serde_json::from_str("\"error_occurred\"").expect("Failed to deserialize status");
    assert_eq!(status, Status::ErrorOccurred);
}

#[test]
fn test_outcome_serializes_fields() {
    let outcome: Outcome<Vec<u8>> = Outcome::success_with(vec![1, 2]);
    let value = serde_json::to_value(&outcome).expect("Failed to serialize outcome");
    assert_eq!(
        value,
        json!({
            "status": "success",
            "content": [1, 2],
            "message": "Nothing to report",
        })
    );

    let outcome: Outcome<u8> = Outcome::not_found_with("gone", &[]);
    let value = serde_json::to_value(&outcome).expect("Failed to serialize outcome");
    assert_eq!(value["content"], serde_json::Value::Null);
    assert_eq!(value["status"], json!("not_found"));
}
