//! Error types for structured error handling.
//!
//! This module provides:
//! - `MaybeError`: Errors from the fallible pattern-matching dispatch forms

use thiserror::Error;

/// Categorised optional-container errors.
///
/// The only failure mode in this crate is an invalid argument to the
/// fallible dispatch forms: a required handler that was not supplied.
/// There is no I/O and no transient failure; every error here is a
/// programming error surfaced synchronously at the violating call site.
///
/// # Variants
/// - `MissingHandler`: A `try_match_*` call received `None` for a handler
///
/// # Examples
/// ```
/// use misc_maybe::MaybeError;
///
/// let err = MaybeError::MissingHandler { handler: "on_present" };
/// assert_eq!(
///     format!("{}", err),
///     "missing `on_present` handler for match dispatch"
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaybeError {
    /// A required dispatch handler was not supplied.
    #[error("missing `{handler}` handler for match dispatch")]
    MissingHandler {
        /// Name of the missing handler parameter.
        handler: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_handler_display() {
        let err = MaybeError::MissingHandler {
            handler: "on_absent",
        };
        assert_eq!(
            format!("{}", err),
            "missing `on_absent` handler for match dispatch"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = MaybeError::MissingHandler {
            handler: "on_present",
        };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = MaybeError::MissingHandler {
            handler: "on_present",
        };
        let err2 = err1;
        assert_eq!(err1, err2);
    }
}
