//! Message templates and the fixed texts attached to outcomes.
//!
//! Templates use a small printf-like placeholder convention:
//!
//! - `%s` is replaced by the next argument, in order
//! - `%%` produces a literal `%`
//! - `%n` produces a line break
//!
//! Every other `%` sequence is a formatting failure. So is a mismatch between
//! the number of `%s` placeholders and the number of arguments.
//!
//! [`format_message`] is total: it never fails and never panics. When the
//! template cannot be filled it returns [`MESSAGE_FORMAT_ERROR`] followed by a
//! description of the failure.
//!
//! # Examples
//!
//! ```rust
//! use outcome_core::message::{format_message, MESSAGE_FORMAT_ERROR, NO_MESSAGE_AVAILABLE};
//!
//! assert_eq!(format_message(Some("user %s not found"), &["42"]), "user 42 not found");
//! assert_eq!(format_message(Some("100% done"), &[]), "100% done");
//! assert_eq!(format_message(None, &["ignored"]), NO_MESSAGE_AVAILABLE);
//! assert!(format_message(Some("%s and %s"), &["one"]).starts_with(MESSAGE_FORMAT_ERROR));
//! ```

use log::warn;

use crate::error::{FormatError, Result};

/// Default message of an outcome built without one.
pub const NOTHING_TO_REPORT: &str = "Nothing to report";

/// Message used when a template is absent.
pub const NO_MESSAGE_AVAILABLE: &str = "No message available";

/// Prefix of the message produced when a template cannot be filled.
pub const MESSAGE_FORMAT_ERROR: &str = "Unable to format result message, reason: ";

/// Prefix of the aggregated message of an unsuccessful combination.
pub const UNSUCCESSFUL_RESULT: &str = "At least one Result was not successful, ";

/// Formats `template` with `args`, falling back to fixed texts instead of
/// failing.
///
/// - An absent template yields [`NO_MESSAGE_AVAILABLE`].
/// - With no arguments the template is returned untouched, so literal `%`
///   characters pass through.
/// - A malformed template yields [`MESSAGE_FORMAT_ERROR`] followed by the
///   failure description.
pub fn format_message(template: Option<&str>, args: &[&str]) -> String {
    let Some(template) = template else {
        return NO_MESSAGE_AVAILABLE.to_string();
    };
    if args.is_empty() {
        return template.to_string();
    }
    match try_format_message(template, args) {
        Ok(message) => message,
        Err(e) => {
            warn!("Unable to format message template {template:?}: {e}");
            format!("{MESSAGE_FORMAT_ERROR}{e}")
        }
    }
}

/// Substitutes `args` into the `%s` placeholders of `template`.
///
/// Unlike [`format_message`], placeholders are always processed, even when
/// `args` is empty.
///
/// # Errors
///
/// Returns a [`FormatError`] when the template holds an unknown conversion,
/// ends in a lone `%`, or when its `%s` count differs from `args.len()`.
pub fn try_format_message(template: &str, args: &[&str]) -> Result<String> {
    let capacity = template.len() + args.iter().map(|arg| arg.len()).sum::<usize>();
    let mut output = String::with_capacity(capacity);
    let mut remaining = args.iter();
    let mut used = 0;

    let mut chars = template.char_indices();
    while let Some((position, ch)) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }
        match chars.next() {
            Some((_, 's')) => {
                let arg = remaining
                    .next()
                    .ok_or(FormatError::MissingArgument { index: used + 1 })?;
                output.push_str(arg);
                used += 1;
            }
            Some((_, '%')) => output.push('%'),
            Some((_, 'n')) => output.push('\n'),
            Some((_, conversion)) => {
                return Err(FormatError::UnknownConversion {
                    conversion,
                    position,
                })
            }
            None => return Err(FormatError::DanglingPercent { position }),
        }
    }

    if used < args.len() {
        return Err(FormatError::UnusedArguments {
            used,
            supplied: args.len(),
        });
    }
    Ok(output)
}
