//! The outcome value and its query contract.
//!
//! An [`Outcome`] reports how an operation went: a [`Status`], optional
//! content, and a human-readable message. Outcomes are built only through the
//! named constructors in [`factory`] and the adapters in [`adapters`], which
//! are the only places a status is assigned. Once built, an outcome never
//! changes.
//!
//! # Examples
//!
//! ```rust
//! use outcome_core::{Outcome, Status};
//!
//! fn find_user(id: u32) -> Outcome<String> {
//!     if id == 1 {
//!         Outcome::success_with("alice".to_string())
//!     } else {
//!         Outcome::not_found_with("user %s does not exist", &[id.to_string().as_str()])
//!     }
//! }
//!
//! let found = find_user(1);
//! assert!(found.is_successful_with_content());
//! assert_eq!(found.content().map(String::as_str), Some("alice"));
//!
//! let missing = find_user(7);
//! assert_eq!(missing.status(), Status::NotFound);
//! assert_eq!(missing.message(), "user 7 does not exist");
//! ```

pub mod adapters;
pub mod factory;


#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{message::NOTHING_TO_REPORT, status::Status};

/// Immutable result of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Outcome<T> {
    status: Status,
    content: Option<T>,
    message: String,
}

impl<T> Outcome<T> {
    /// Assembles an outcome. Kept private so that statuses are only assigned
    /// by the named constructors.
    fn new(status: Status, content: Option<T>, message: String) -> Self {
        Self {
            status,
            content,
            message,
        }
    }

    /// Outcome without content carrying the default message.
    fn bare(status: Status) -> Self {
        Self::new(status, None, NOTHING_TO_REPORT.to_string())
    }

    /// Status assigned at construction.
    pub fn status(&self) -> Status {
        self.status
    }

    /// `true` for `Success` and `EmptyResource`.
    pub fn is_successful(&self) -> bool {
        self.status.is_successful()
    }

    /// `true` for every failure status.
    pub fn is_unsuccessful(&self) -> bool {
        !self.is_successful()
    }

    /// `true` when the outcome is successful and carries content.
    pub fn is_successful_with_content(&self) -> bool {
        self.is_successful() && self.has_content()
    }

    /// `true` when the outcome carries content.
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// `true` when the outcome carries no content.
    pub fn is_empty(&self) -> bool {
        !self.has_content()
    }

    /// Borrow the content, if any.
    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    /// Message describing the outcome. Outcomes built without a message
    /// report [`NOTHING_TO_REPORT`].
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Take the content out of the outcome.
    pub fn into_content(self) -> Option<T> {
        self.content
    }

    /// Split the outcome into its status, content and message.
    pub fn into_parts(self) -> (Status, Option<T>, String) {
        (self.status, self.content, self.message)
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::success()
    }
}
