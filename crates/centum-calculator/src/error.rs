//! Classified input failures surfaced to the user.

use centum_types::{Locale, texts};
use thiserror::Error;

/// Why a calculation request was rejected before any formula ran.
///
/// Both variants are local, recoverable, user-facing notifications; the user
/// corrects the inputs and retries. Neither carries partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A required field is missing, zero, or not a finite number.
    #[error("invalid or missing numeric input '{field}'")]
    InvalidNumber {
        /// The first required field that failed the validity rule.
        field: String,
    },

    /// A required denominator field is exactly zero.
    #[error("division by zero: required field '{field}' is 0")]
    DivisionByZero {
        /// The denominator field.
        field: String,
    },
}

impl InputError {
    /// The field the failure was classified on.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidNumber { field } | Self::DivisionByZero { field } => field,
        }
    }

    /// The localized notification text shown to the user.
    pub const fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            Self::InvalidNumber { .. } => texts::error_invalid_number(locale),
            Self::DivisionByZero { .. } => texts::error_division_by_zero(locale),
        }
    }
}
