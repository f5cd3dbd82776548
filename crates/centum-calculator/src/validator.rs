//! Input validation.
//!
//! Raw user input arrives as strings. Conversion never fails on its own:
//! anything unparseable (including an empty string or a literal `NaN`)
//! becomes `0.0`. The business rule then treats an exact zero or a
//! non-finite value in a required field as missing, so a legitimately
//! entered zero is rejected the same way an empty field is.

use crate::error::InputError;
use centum_types::CalculationKind;
use std::collections::HashMap;

/// Converts a raw string input set into a numeric one.
pub fn parse_inputs(raw: &HashMap<String, String>) -> HashMap<String, f64> {
    raw.iter()
        .map(|(name, value)| {
            let parsed = value.trim().parse::<f64>().unwrap_or(0.0);
            let resolved = if parsed.is_nan() { 0.0 } else { parsed };
            (name.clone(), resolved)
        })
        .collect()
}

/// Checks that every field the kind requires carries a usable number.
///
/// A zero denominator is classified as [`InputError::DivisionByZero`] in
/// preference to the generic [`InputError::InvalidNumber`]. Either all
/// required fields pass or exactly one classified failure is returned; no
/// calculation is attempted on failure.
pub fn validate(kind: CalculationKind, values: &HashMap<String, f64>) -> Result<(), InputError> {
    if let Some(denominator) = kind.denominator_field() {
        if values.get(denominator).copied().unwrap_or(0.0) == 0.0 {
            return Err(InputError::DivisionByZero { field: denominator.to_string() });
        }
    }

    for &field in kind.required_fields() {
        let value = values.get(field).copied().unwrap_or(0.0);
        if value == 0.0 || !value.is_finite() {
            return Err(InputError::InvalidNumber { field: field.to_string() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn numeric(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn unparseable_strings_become_zero() {
        let values = parse_inputs(&raw(&[
            ("percentage", "25"),
            ("value", "abc"),
            ("empty", ""),
            ("nan", "NaN"),
        ]));
        assert_eq!(values["percentage"], 25.0);
        assert_eq!(values["value"], 0.0);
        assert_eq!(values["empty"], 0.0);
        assert_eq!(values["nan"], 0.0);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let values = parse_inputs(&raw(&[("value", "  12.5 ")]));
        assert_eq!(values["value"], 12.5);
    }

    #[test]
    fn zero_counts_as_missing() {
        let err = validate(
            CalculationKind::PercentOf,
            &numeric(&[("percentage", 25.0), ("value", 0.0)]),
        )
        .unwrap_err();
        assert_eq!(err, InputError::InvalidNumber { field: "value".to_string() });
    }

    #[test]
    fn absent_field_counts_as_missing() {
        let err = validate(CalculationKind::PercentOf, &numeric(&[("percentage", 25.0)]))
            .unwrap_err();
        assert_eq!(err, InputError::InvalidNumber { field: "value".to_string() });
    }

    #[test]
    fn infinite_value_counts_as_missing() {
        let err = validate(
            CalculationKind::PercentOf,
            &numeric(&[("percentage", f64::INFINITY), ("value", 200.0)]),
        )
        .unwrap_err();
        assert_eq!(err, InputError::InvalidNumber { field: "percentage".to_string() });
    }

    #[test]
    fn zero_denominator_wins_over_invalid_number() {
        // Both fields are zero; the denominator classification takes priority.
        let err = validate(
            CalculationKind::WhatPercent,
            &numeric(&[("partValue", 0.0), ("totalValue", 0.0)]),
        )
        .unwrap_err();
        assert_eq!(err, InputError::DivisionByZero { field: "totalValue".to_string() });
    }

    #[test]
    fn percent_difference_denominator_is_first_value() {
        let err = validate(
            CalculationKind::PercentDifference,
            &numeric(&[("firstValue", 0.0), ("secondValue", 120.0)]),
        )
        .unwrap_err();
        assert_eq!(err, InputError::DivisionByZero { field: "firstValue".to_string() });
    }

    #[test]
    fn negative_values_pass_validation() {
        assert!(
            validate(
                CalculationKind::PercentIncrease,
                &numeric(&[("originalValue", 100.0), ("percentage", -15.0)]),
            )
            .is_ok()
        );
    }
}
