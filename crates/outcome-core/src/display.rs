//! Display implementations for statuses and outcomes.
//!
//! An outcome renders as `<status>: <message>`. Content is never rendered, so
//! any content type can be displayed.
//!
//! ```rust
//! use outcome_core::Outcome;
//!
//! let outcome: Outcome<Vec<u8>> = Outcome::not_found_with("no blob %s", &["a1"]);
//! assert_eq!(outcome.to_string(), "not_found: no blob a1");
//! ```

use std::fmt;

use crate::{outcome::Outcome, status::Status};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", Status::EmptyResource), "empty_resource");
        assert_eq!(format!("{}", Status::ErrorOccurred), "error_occurred");
    }

    #[test]
    fn test_outcome_display() {
        let success: Outcome<u8> = Outcome::success_with(1);
        assert_eq!(format!("{success}"), "success: Nothing to report");

        let failure: Outcome<u8> = Outcome::unauthorized_with("role %s required", &["admin"]);
        assert_eq!(format!("{failure}"), "unauthorized: role admin required");
    }
}
