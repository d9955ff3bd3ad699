//! Error types for message formatting and status parsing.
//!
//! These errors never escape the outcome constructors. They exist so that
//! [`crate::message::try_format_message`] and [`crate::Status`]'s `FromStr`
//! implementation can report what went wrong to callers that want to know.

use thiserror::Error;

/// Reasons a message template could not be filled with its arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The template holds more `%s` placeholders than arguments were supplied
    #[error("Format specifier '%s' at placeholder {index} has no matching argument")]
    MissingArgument { index: usize },

    /// Fewer `%s` placeholders than supplied arguments
    #[error("{supplied} arguments supplied but only {used} placeholders found")]
    UnusedArguments { used: usize, supplied: usize },

    /// A `%` followed by a conversion other than `s`, `%` or `n`
    #[error("Unknown format conversion '%{conversion}' at byte {position}")]
    UnknownConversion { conversion: char, position: usize },

    /// A lone `%` closing the template
    #[error("Incomplete format specifier '%' at byte {position}")]
    DanglingPercent { position: usize },
}

/// Error returned when a string does not name a [`crate::Status`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid outcome status: {0}")]
pub struct ParseStatusError(pub String);

/// Result type alias for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;
