//! Error types for structured error handling.
//!
//! This module provides:
//! - `RandomError`: Errors from range-bounded random draws

use thiserror::Error;

/// Categorised random-draw errors.
///
/// The bounded draw forms reject an empty or inverted range immediately
/// at the call site. There are no retries anywhere in this crate: every
/// failure is a precondition violation, never a transient condition.
///
/// # Variants
/// - `InvalidBound`: `next_int_below` received a non-positive bound
/// - `EmptyRange`: `next_int_between` received `max <= min`
///
/// # Examples
/// ```
/// use misc_random::RandomError;
///
/// let err = RandomError::InvalidBound { bound: 0 };
/// assert_eq!(format!("{}", err), "invalid bound: 0 (must be positive)");
///
/// let err = RandomError::EmptyRange { min: 10, max: 5 };
/// assert_eq!(format!("{}", err), "empty range: [10, 5)");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// The requested exclusive upper bound was not positive.
    #[error("invalid bound: {bound} (must be positive)")]
    InvalidBound {
        /// The rejected bound.
        bound: i32,
    },

    /// The requested half-open range `[min, max)` contains no values.
    #[error("empty range: [{min}, {max})")]
    EmptyRange {
        /// Inclusive lower bound.
        min: i32,
        /// Exclusive upper bound.
        max: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bound_display() {
        let err = RandomError::InvalidBound { bound: -3 };
        assert_eq!(format!("{}", err), "invalid bound: -3 (must be positive)");
    }

    #[test]
    fn test_empty_range_display() {
        let err = RandomError::EmptyRange { min: 5, max: 5 };
        assert_eq!(format!("{}", err), "empty range: [5, 5)");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = RandomError::InvalidBound { bound: 0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = RandomError::EmptyRange { min: 1, max: 0 };
        let err2 = err1;
        assert_eq!(err1, err2);
    }
}
