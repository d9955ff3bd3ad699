//! Folding several outcomes into one.
//!
//! A [`Combiner`] is seeded with a first outcome, folds further outcomes with
//! [`Combiner::with`] or [`Combiner::and`], and is consumed by exactly one
//! reduction:
//!
//! - [`Combiner::merge`] keeps the collected content as a list
//! - [`Combiner::sum`] only reports whether everything succeeded
//!
//! When any folded outcome was unsuccessful, both reductions return an
//! `Unprocessable` outcome without content whose message lists every failure
//! message in fold order.
//!
//! # Examples
//!
//! ```rust
//! use outcome_core::{Outcome, Status};
//!
//! let merged = Outcome::<i32>::combine(Outcome::success_with(1))
//!     .with(Outcome::success_with(2))
//!     .and(Outcome::success_with(3))
//!     .merge();
//! assert_eq!(merged.content(), Some(&vec![1, 2, 3]));
//!
//! let merged = Outcome::combine(Outcome::<i32>::error_occurred("e1", &[]))
//!     .with(Outcome::not_found_with("no %s", &["user"]))
//!     .merge();
//! assert_eq!(merged.status(), Status::Unprocessable);
//! assert_eq!(
//!     merged.message(),
//!     "At least one Result was not successful, message-1: e1, message-2: no user"
//! );
//! ```

use log::trace;

use crate::{message::UNSUCCESSFUL_RESULT, outcome::Outcome};

/// Single-shot accumulator over a sequence of outcomes.
#[derive(Debug, Clone)]
#[must_use = "a combiner does nothing until it is merged or summed"]
pub struct Combiner<T> {
    collected: Vec<T>,
    messages: Vec<String>,
    all_successful: bool,
}

impl<T> Combiner<T> {
    /// Creates a combiner seeded with `first`.
    pub fn new(first: Outcome<T>) -> Self {
        Self::empty().with(first)
    }

    fn empty() -> Self {
        Self {
            collected: Vec::new(),
            messages: Vec::new(),
            all_successful: true,
        }
    }

    /// Folds `next` into the combiner.
    ///
    /// Content is collected whatever the status. An unsuccessful outcome
    /// contributes its message and marks the combination as unsuccessful for
    /// good.
    pub fn with(mut self, next: Outcome<T>) -> Self {
        self.fold(next);
        self
    }

    /// Same as [`Combiner::with`], for chaining readability.
    pub fn and(self, next: Outcome<T>) -> Self {
        self.with(next)
    }

    fn fold(&mut self, next: Outcome<T>) {
        let successful = next.is_successful();
        let (status, content, message) = next.into_parts();
        trace!(
            "Folding {} outcome (content: {})",
            status.as_str(),
            content.is_some()
        );
        if let Some(content) = content {
            self.collected.push(content);
        }
        if !successful {
            self.messages.push(message);
            self.all_successful = false;
        }
    }

    /// `true` while no unsuccessful outcome has been folded in.
    pub fn is_all_successful(&self) -> bool {
        self.all_successful
    }

    /// Number of content values collected so far.
    pub fn collected_len(&self) -> usize {
        self.collected.len()
    }

    /// Number of unsuccessful outcomes folded so far.
    pub fn failure_count(&self) -> usize {
        self.messages.len()
    }

    /// Reduces to a successful outcome carrying every collected content, or
    /// to an `Unprocessable` outcome without content when anything failed.
    pub fn merge(self) -> Outcome<Vec<T>> {
        trace!(
            "Merging {} collected values, {} failures",
            self.collected.len(),
            self.messages.len()
        );
        if self.all_successful {
            Outcome::success_with(self.collected)
        } else {
            Outcome::unprocessable_with(&aggregate_messages(&self.messages), &[])
        }
    }

    /// Reduces to a successful outcome without content, or to an
    /// `Unprocessable` outcome when anything failed. Collected content is
    /// dropped either way.
    pub fn sum(self) -> Outcome<T> {
        trace!("Summing {} failures", self.messages.len());
        if self.all_successful {
            Outcome::success()
        } else {
            Outcome::unprocessable_with(&aggregate_messages(&self.messages), &[])
        }
    }
}

impl<T> Outcome<T> {
    /// Starts combining outcomes, beginning with `first`.
    pub fn combine(first: Outcome<T>) -> Combiner<T> {
        Combiner::new(first)
    }
}

impl<T> Extend<Outcome<T>> for Combiner<T> {
    fn extend<I: IntoIterator<Item = Outcome<T>>>(&mut self, iter: I) {
        for outcome in iter {
            self.fold(outcome);
        }
    }
}

/// Folds every outcome of the iterator. An empty iterator merges into a
/// successful, empty list.
impl<T> FromIterator<Outcome<T>> for Combiner<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut combiner = Self::empty();
        combiner.extend(iter);
        combiner
    }
}

fn aggregate_messages(messages: &[String]) -> String {
    let labeled: Vec<String> = messages
        .iter()
        .enumerate()
        .map(|(i, message)| format!("message-{}: {message}", i + 1))
        .collect();
    format!("{UNSUCCESSFUL_RESULT}{}", labeled.join(", "))
}
