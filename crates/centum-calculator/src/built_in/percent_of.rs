//! Calculator for taking a percentage of a value.
//!
//! For example, 25% of 200 is 50 ((25 / 100) × 200).

use crate::error::InputError;
use crate::plugin::{CalculatorInputs, CalculatorPlugin};
use centum_types::{CalculationKind, Locale, texts};

/// Calculator for percent-of operations
///
/// # Arguments
/// * `percentage` - Percentage to take (e.g., 25 for 25%)
/// * `value` - Value the percentage is taken of
#[derive(Debug, Default)]
pub struct PercentOfCalculator;

impl CalculatorPlugin for PercentOfCalculator {
    fn kind(&self) -> CalculationKind {
        CalculationKind::PercentOf
    }

    fn compute(&self, inputs: &CalculatorInputs<'_>) -> Result<f64, InputError> {
        let percentage = inputs.get("percentage")?;
        let value = inputs.get("value")?;
        Ok((percentage / 100.0) * value)
    }

    fn formula(&self, _inputs: &CalculatorInputs<'_>, locale: Locale) -> &'static str {
        texts::formula_label(CalculationKind::PercentOf, locale)
    }

    fn explain(&self, inputs: &CalculatorInputs<'_>, result: f64, locale: Locale) -> String {
        let percentage = inputs.get_or_zero("percentage");
        let value = inputs.get_or_zero("value");
        let title = texts::kind_title(CalculationKind::PercentOf, locale).to_lowercase();
        format!("{percentage}% {title} {value} = {result}")
    }
}
