//! Calculator for the absolute percentage difference between two values.
//!
//! The result is always non-negative; the validator guarantees `firstValue`
//! is never zero here.

use crate::error::InputError;
use crate::plugin::{CalculatorInputs, CalculatorPlugin};
use centum_types::{CalculationKind, Locale, texts};

/// Calculator for percentage-difference operations
///
/// # Arguments
/// * `firstValue` - The reference value (non-zero)
/// * `secondValue` - The value compared against it
#[derive(Debug, Default)]
pub struct PercentDifferenceCalculator;

impl CalculatorPlugin for PercentDifferenceCalculator {
    fn kind(&self) -> CalculationKind {
        CalculationKind::PercentDifference
    }

    fn compute(&self, inputs: &CalculatorInputs<'_>) -> Result<f64, InputError> {
        let first = inputs.get("firstValue")?;
        let second = inputs.get("secondValue")?;
        Ok(((second - first) / first).abs() * 100.0)
    }

    fn formula(&self, _inputs: &CalculatorInputs<'_>, locale: Locale) -> &'static str {
        texts::formula_label(CalculationKind::PercentDifference, locale)
    }

    fn explain(&self, inputs: &CalculatorInputs<'_>, result: f64, locale: Locale) -> String {
        let first = inputs.get_or_zero("firstValue");
        let second = inputs.get_or_zero("secondValue");
        let title = texts::kind_title(CalculationKind::PercentDifference, locale);
        format!("{title}: {first} → {second} = {result:.2}%")
    }
}
