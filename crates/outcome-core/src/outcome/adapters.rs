//! Adapters turning fallible closures, predicates and options into outcomes.
//!
//! A closure "raises" by returning `Err`. The adapters capture that error and
//! report it as an `ErrorOccurred` outcome whose message is the error's
//! [`Display`] text, so no error ever reaches the caller. An error that
//! displays as an empty string is reported as
//! [`NO_MESSAGE_AVAILABLE`](crate::message::NO_MESSAGE_AVAILABLE).
//!
//! # Examples
//!
//! ```rust
//! use outcome_core::{Outcome, Status};
//!
//! let parsed: Outcome<u16> = Outcome::from_supplier(|| "8080".parse::<u16>().map(Some));
//! assert_eq!(parsed.content(), Some(&8080));
//!
//! let failed: Outcome<u16> = Outcome::from_supplier(|| "http".parse::<u16>().map(Some));
//! assert_eq!(failed.status(), Status::ErrorOccurred);
//! assert_eq!(failed.message(), "invalid digit found in string");
//! ```

use std::fmt::Display;

use log::debug;

use super::Outcome;
use crate::{message::format_message, status::Status};

impl<T> Outcome<T> {
    /// Run a side-effecting `action`.
    ///
    /// Returns [`Outcome::success`] when it completes, or an `ErrorOccurred`
    /// outcome describing the error it returned.
    pub fn from_action<F, E>(action: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
        E: Display,
    {
        match action() {
            Ok(()) => Self::success(),
            Err(e) => Self::captured(&e),
        }
    }

    /// Run a value-producing `supplier`.
    ///
    /// The supplied value goes through [`Outcome::success_with`], so `None`
    /// yields `EmptyResource`. An error yields `ErrorOccurred`.
    pub fn from_supplier<F, E>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<Option<T>, E>,
        E: Display,
    {
        match supplier() {
            Ok(content) => Self::success_with(content),
            Err(e) => Self::captured(&e),
        }
    }

    /// Test `value` with `predicate`.
    ///
    /// A passing test yields `Success` carrying `value`, a failing one yields
    /// [`Outcome::unprocessable`], and an error yields `ErrorOccurred`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_core::{Outcome, Status};
    ///
    /// let is_even = |n: &u32| Ok::<_, std::convert::Infallible>(n % 2 == 0);
    ///
    /// assert_eq!(Outcome::from_predicate(is_even, 4).content(), Some(&4));
    /// assert_eq!(Outcome::from_predicate(is_even, 5).status(), Status::Unprocessable);
    /// ```
    pub fn from_predicate<P, E>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> Result<bool, E>,
        E: Display,
    {
        match predicate(&value) {
            Ok(true) => Self::success_with(value),
            Ok(false) => Self::unprocessable(),
            Err(e) => Self::captured(&e),
        }
    }

    /// `Some` becomes a successful outcome with content, `None` becomes
    /// [`Outcome::empty_resource`].
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(content) => Self::success_with(content),
            None => Self::empty_resource(),
        }
    }

    /// [`Outcome::success`] when `condition` holds, otherwise
    /// [`Outcome::unprocessable`].
    pub fn from_condition(condition: bool) -> Self {
        if condition {
            Self::success()
        } else {
            Self::unprocessable()
        }
    }

    fn captured<E: Display>(error: &E) -> Self {
        let description = error.to_string();
        debug!("Delegate failed, reporting {:?}: {description}", Status::ErrorOccurred);
        let template = (!description.is_empty()).then_some(description.as_str());
        Self::new(Status::ErrorOccurred, None, format_message(template, &[]))
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}
