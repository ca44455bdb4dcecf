//! Error type shared by validation, parsing, and the fraction kernel.
//!
//! Missing data is not an error: getters return `None` when a quantity can be
//! neither derived nor found in the stored measurements.

use thiserror::Error;

use crate::properties::Quantity;

/// Rejected input.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ScreenError {
    /// Value is zero, negative, NaN, or infinite.
    #[error("{0} must be a positive number")]
    NotPositive(Quantity),
    /// Pixel-valued quantity has a fractional part.
    #[error("{0} must be a positive integer")]
    NotInteger(Quantity),
    /// Property name does not match any known quantity.
    #[error("unrecognized property name")]
    UnknownProperty,
    /// Query value could not be read as a number.
    #[error("{0} could not be parsed as a number")]
    Unparsable(Quantity),
    /// Precision outside the open interval `(0, 1)`.
    #[error("precision must be between 0 and 1 (exclusive)")]
    PrecisionOutOfRange,
    /// Value to approximate is not a positive finite number.
    #[error("value to approximate must be a positive finite number")]
    ValueNotPositive,
}
