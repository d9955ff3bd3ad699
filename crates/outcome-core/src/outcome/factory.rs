//! Named constructors and status-preserving transformations.
//!
//! | Constructor | Status | Content | Message |
//! |---|---|---|---|
//! | [`Outcome::success`] | `Success` | none | default |
//! | [`Outcome::success_with`] | `Success`, or `EmptyResource` when absent | given | default |
//! | [`Outcome::empty_resource`] / [`Outcome::empty_resource_with`] | `EmptyResource` | none | default / formatted |
//! | [`Outcome::not_found`] / [`Outcome::not_found_with`] | `NotFound` | none | default / formatted |
//! | [`Outcome::unprocessable`] / [`Outcome::unprocessable_with`] | `Unprocessable` | none | default / formatted |
//! | [`Outcome::unauthorized`] / [`Outcome::unauthorized_with`] | `Unauthorized` | none | default / formatted |
//! | [`Outcome::error_occurred`] | `ErrorOccurred` | none | formatted |
//!
//! Messages are formatted with [`format_message`], so `%s` placeholders are
//! filled from `args` and a malformed template produces a diagnostic message
//! instead of an error.

use super::Outcome;
use crate::{
    message::{format_message, NOTHING_TO_REPORT},
    status::Status,
};

impl<T> Outcome<T> {
    /// Successful outcome without content.
    pub fn success() -> Self {
        Self::bare(Status::Success)
    }

    /// Successful outcome carrying `content`.
    ///
    /// An absent `content` yields `EmptyResource` rather than a `Success`
    /// without content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_core::{Outcome, Status};
    ///
    /// let filled: Outcome<u32> = Outcome::success_with(7);
    /// assert_eq!(filled.status(), Status::Success);
    /// assert_eq!(filled.content(), Some(&7));
    ///
    /// let empty: Outcome<u32> = Outcome::success_with(None);
    /// assert_eq!(empty.status(), Status::EmptyResource);
    /// ```
    pub fn success_with(content: impl Into<Option<T>>) -> Self {
        match content.into() {
            Some(content) => Self::new(
                Status::Success,
                Some(content),
                NOTHING_TO_REPORT.to_string(),
            ),
            None => Self::empty_resource(),
        }
    }

    /// The resource exists but holds nothing to return.
    pub fn empty_resource() -> Self {
        Self::bare(Status::EmptyResource)
    }

    /// `EmptyResource` outcome with a formatted message.
    pub fn empty_resource_with(template: &str, args: &[&str]) -> Self {
        Self::with_message(Status::EmptyResource, template, args)
    }

    /// The requested resource does not exist.
    pub fn not_found() -> Self {
        Self::bare(Status::NotFound)
    }

    /// `NotFound` outcome with a formatted message.
    pub fn not_found_with(template: &str, args: &[&str]) -> Self {
        Self::with_message(Status::NotFound, template, args)
    }

    /// Generic failure for any rejected process or validation.
    pub fn unprocessable() -> Self {
        Self::bare(Status::Unprocessable)
    }

    /// `Unprocessable` outcome with a formatted message.
    pub fn unprocessable_with(template: &str, args: &[&str]) -> Self {
        Self::with_message(Status::Unprocessable, template, args)
    }

    /// Authentication or authorization failure.
    pub fn unauthorized() -> Self {
        Self::bare(Status::Unauthorized)
    }

    /// `Unauthorized` outcome with a formatted message.
    pub fn unauthorized_with(template: &str, args: &[&str]) -> Self {
        Self::with_message(Status::Unauthorized, template, args)
    }

    /// An error was raised while performing the operation. The message is
    /// required.
    pub fn error_occurred(template: &str, args: &[&str]) -> Self {
        Self::with_message(Status::ErrorOccurred, template, args)
    }

    fn with_message(status: Status, template: &str, args: &[&str]) -> Self {
        Self::new(status, None, format_message(Some(template), args))
    }

    /// Re-derive this outcome with another content type and no content.
    ///
    /// The status and message are kept. A `Success` has nothing left to carry
    /// and becomes `EmptyResource`.
    pub fn transform<U>(&self) -> Outcome<U> {
        rebuild(self.status, &self.message, None)
    }

    /// Re-derive this outcome with another content type, carrying `content`.
    ///
    /// The source is dispatched on its status: a `Success` is rebuilt through
    /// [`Outcome::success_with`], every other status through its own
    /// constructor with the source message. Only successful outcomes carry
    /// content, so `content` is dropped for the failure statuses and for
    /// `EmptyResource`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_core::{Outcome, Status};
    ///
    /// let count: Outcome<usize> = Outcome::success_with(3);
    /// let label: Outcome<String> = count.transform_with("three".to_string());
    /// assert_eq!(label.status(), Status::Success);
    /// assert_eq!(label.content().map(String::as_str), Some("three"));
    ///
    /// let denied: Outcome<usize> = Outcome::unauthorized_with("token expired", &[]);
    /// let label: Outcome<String> = denied.transform_with("unused".to_string());
    /// assert_eq!(label.status(), Status::Unauthorized);
    /// assert_eq!(label.message(), "token expired");
    /// assert!(label.is_empty());
    /// ```
    pub fn transform_with<U>(&self, content: impl Into<Option<U>>) -> Outcome<U> {
        rebuild(self.status, &self.message, content.into())
    }

    /// Re-derive this outcome with another content type and a new message.
    ///
    /// Behaves like [`Outcome::transform`], with the formatted `template`
    /// replacing the source message. A `Success` source goes through
    /// [`Outcome::success_with`] like any other transform, so it becomes an
    /// `EmptyResource` with the default message and the new one is not used.
    pub fn transform_with_message<U>(&self, template: &str, args: &[&str]) -> Outcome<U> {
        rebuild(self.status, &format_message(Some(template), args), None)
    }
}

fn rebuild<U>(status: Status, message: &str, content: Option<U>) -> Outcome<U> {
    match status {
        Status::Success => Outcome::success_with(content),
        Status::EmptyResource => Outcome::empty_resource_with(message, &[]),
        Status::NotFound => Outcome::not_found_with(message, &[]),
        Status::Unauthorized => Outcome::unauthorized_with(message, &[]),
        Status::ErrorOccurred => Outcome::error_occurred(message, &[]),
        Status::Unprocessable => Outcome::unprocessable_with(message, &[]),
    }
}
