// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for tidal argument computation.
//!
//! Every failure is a construction-time configuration error raised while
//! validating the caller's input. Once an [`Epoch`](crate::Epoch) and a
//! [`TidalArgumentTable`](crate::TidalArgumentTable) exist, nothing else can
//! fail: the astronomical formulas are closed-form and total.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidDateType`](TideError::InvalidDateType) | timestamp parsing |
//! | [`InvalidDateOrder`](TideError::InvalidDateOrder) | epoch window validation |
//! | [`UnknownConstituent`](TideError::UnknownConstituent) | constituent selection |

use thiserror::Error;

/// Errors raised while validating tidal forcing input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TideError {
    /// A date value could not be interpreted as a timestamp.
    #[error("{field} must be a valid timestamp, got '{value}'")]
    InvalidDateType {
        /// Which input was rejected (`start_date`, `end_date`, `spinup_date`).
        field: &'static str,
        /// The offending raw value.
        value: String,
    },

    /// The epoch instants are not strictly increasing.
    #[error("invalid date order: {reason}")]
    InvalidDateOrder { reason: String },

    /// A requested constituent is not part of the selectable vocabulary.
    #[error("unknown tidal constituent '{code}'; possible constituents are: {valid}")]
    UnknownConstituent {
        code: String,
        /// The selectable vocabulary, comma separated, in declaration order.
        valid: String,
    },
}

impl TideError {
    #[inline]
    pub(crate) fn invalid_date_type(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidDateType {
            field,
            value: value.into(),
        }
    }

    #[inline]
    pub(crate) fn invalid_date_order(reason: impl Into<String>) -> Self {
        Self::InvalidDateOrder {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type TideResult<T> = Result<T, TideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_type_names_the_field() {
        let err = TideError::invalid_date_type("end_date", "yesterday");
        let msg = err.to_string();
        assert!(msg.contains("end_date"));
        assert!(msg.contains("yesterday"));
    }

    #[test]
    fn invalid_date_order_carries_reason() {
        let err = TideError::invalid_date_order("end_date must be larger than start_date");
        assert_eq!(
            err.to_string(),
            "invalid date order: end_date must be larger than start_date"
        );
    }
}
