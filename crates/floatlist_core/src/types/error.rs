//! Error types for structured error handling.
//!
//! This module provides:
//! - `ResolveError`: Errors from fractional-index resolution (read, write, range)

use thiserror::Error;

/// Fractional-index resolution errors.
///
/// Out-of-range indices are never reported here: under the clamping policy
/// they saturate to the boundary element, and under the wrapping policy they
/// are reduced modulo the sequence length. Only genuine misuse surfaces as
/// an error.
///
/// # Variants
/// - `EmptySequence`: Resolution attempted on a zero-length sequence
/// - `InvalidStep`: Range step is zero or not finite
/// - `InvalidRange`: Range bounds are not finite
/// - `RangeOverflow`: Range has more elements than can be addressed
/// - `NonFiniteIndex`: Index cannot be mapped to a position
///
/// # Examples
/// ```
/// use floatlist_core::types::ResolveError;
///
/// let err = ResolveError::InvalidStep { step: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid range step 0: must be finite and non-zero");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolveError {
    /// The sequence has no elements to resolve against.
    #[error("Cannot resolve an index on an empty sequence")]
    EmptySequence,

    /// Range step is zero (which would never terminate) or not finite.
    #[error("Invalid range step {step}: must be finite and non-zero")]
    InvalidStep {
        /// The rejected step
        step: f64,
    },

    /// Range start or stop is not finite.
    #[error("Invalid range bounds [{start}, {stop}): must be finite")]
    InvalidRange {
        /// Range start
        start: f64,
        /// Range stop
        stop: f64,
    },

    /// Range element count does not fit in `usize`.
    #[error("Range of {count} elements exceeds addressable size")]
    RangeOverflow {
        /// The computed element count
        count: f64,
    },

    /// Index is NaN, or infinite under a wrapping policy.
    #[error("Index {index} cannot be resolved to a position")]
    NonFiniteIndex {
        /// The rejected index
        index: f64,
    },
}

impl ResolveError {
    /// Returns true if the error was caused by the range arguments rather
    /// than by the sequence or a single index.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            ResolveError::InvalidStep { .. }
                | ResolveError::InvalidRange { .. }
                | ResolveError::RangeOverflow { .. }
        )
    }
}
