//! Status classification attached to every outcome.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseStatusError;

/// Type-safe enumeration of outcome statuses.
///
/// `Success` and `EmptyResource` are the successful statuses; every other
/// variant classifies a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// The operation succeeded
    Success,

    /// The operation succeeded but produced no content
    EmptyResource,

    /// Generic failure, e.g. a rejected validation
    Unprocessable,

    /// Failure caused by missing authentication or authorization
    Unauthorized,

    /// The requested resource does not exist
    NotFound,

    /// An error was raised while performing the operation
    ErrorOccurred,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 6] = [
        Status::Success,
        Status::EmptyResource,
        Status::Unprocessable,
        Status::Unauthorized,
        Status::NotFound,
        Status::ErrorOccurred,
    ];

    /// Returns `true` for `Success` and `EmptyResource`.
    ///
    /// This is the only place the success classification is decided.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_core::Status;
    ///
    /// assert!(Status::EmptyResource.is_successful());
    /// assert!(!Status::NotFound.is_successful());
    /// ```
    pub const fn is_successful(self) -> bool {
        matches!(self, Status::Success | Status::EmptyResource)
    }

    /// Returns `true` for every failure status.
    pub const fn is_unsuccessful(self) -> bool {
        !self.is_successful()
    }

    /// Stable lowercase name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::EmptyResource => "empty_resource",
            Status::Unprocessable => "unprocessable",
            Status::Unauthorized => "unauthorized",
            Status::NotFound => "not_found",
            Status::ErrorOccurred => "error_occurred",
        }
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "success" => Ok(Status::Success),
            "empty_resource" | "emptyresource" => Ok(Status::EmptyResource),
            "unprocessable" => Ok(Status::Unprocessable),
            "unauthorized" => Ok(Status::Unauthorized),
            "not_found" | "notfound" => Ok(Status::NotFound),
            "error_occurred" | "erroroccurred" => Ok(Status::ErrorOccurred),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}
