//! Value-oriented outcome type for reporting the result of an operation.
//!
//! An [`Outcome`] replaces raised errors and bare `Option`/`bool` returns with
//! a single immutable value that tells the caller:
//!
//! - whether the operation succeeded ([`Outcome::is_successful`])
//! - which kind of failure occurred otherwise ([`Status`])
//! - the optional content it produced ([`Outcome::content`])
//! - a human-readable message ([`Outcome::message`])
//!
//! # Module Organization
//!
//! - [`status`]: The closed [`Status`] taxonomy and its success classification
//! - [`outcome`]: The [`Outcome`] value, its constructors and adapters
//! - [`combiner`]: [`Combiner`], which folds several outcomes into one
//! - [`message`]: Message templates and the fixed message texts
//! - [`error`]: Formatting and parsing errors
//!
//! # Quick Start
//!
//! ```rust
//! use outcome_core::{Outcome, Status};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     Outcome::from_supplier(|| raw.parse::<u16>().map(Some))
//! }
//!
//! fn check_port(port: u16) -> Outcome<u16> {
//!     Outcome::from_predicate(|p: &u16| Ok::<_, std::convert::Infallible>(*p >= 1024), port)
//! }
//!
//! let port = parse_port("8080");
//! assert_eq!(port.status(), Status::Success);
//!
//! let checked = port
//!     .content()
//!     .map_or_else(|| port.transform(), |p| check_port(*p));
//! assert!(checked.is_successful_with_content());
//!
//! // Several outcomes reduce to one
//! let all = Outcome::combine(parse_port("80"))
//!     .with(parse_port("http"))
//!     .merge();
//! assert_eq!(all.status(), Status::Unprocessable);
//! assert!(all.message().contains("message-1: invalid digit found in string"));
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Status`] and
//!   `Serialize` for [`Outcome`]

pub mod combiner;
mod display;
pub mod error;
pub mod message;
pub mod outcome;
pub mod status;

// Re-export commonly used types for convenience
pub use combiner::Combiner;
pub use error::{FormatError, ParseStatusError};
pub use message::format_message;
pub use outcome::Outcome;
pub use status::Status;
