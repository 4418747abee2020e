//! Marshalling error type.

use thiserror::Error;

/// Error type for numeric marshalling operations.
///
/// Every error is returned at the point of detection; no conversion ever
/// yields a truncated, wrapped, or rounded substitute value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// The object is not of a kind convertible to the requested native type.
    #[error("expected {expected}, got `{found}` object")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The integer value does not fit the target native width.
    #[error("overflow when unpacking {0}")]
    IntOverflow(&'static str),
    /// The integer value is not exactly representable as a double.
    #[error("precision loss when unpacking {0} as double")]
    PrecisionLoss(i64),
}
