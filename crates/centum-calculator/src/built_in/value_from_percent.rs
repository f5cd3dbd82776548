//! Calculator for finding the value a percentage represents of a total.
//!
//! Algebraically identical to the percent-of calculator; kept as its own
//! kind so labels and history entries stay distinguishable.

use crate::error::InputError;
use crate::plugin::{CalculatorInputs, CalculatorPlugin};
use centum_types::{CalculationKind, Locale, texts};

/// Calculator for value-from-percent operations
///
/// # Arguments
/// * `percentage` - Percentage to take (e.g., 30 for 30%)
/// * `totalValue` - Total the percentage is taken of
#[derive(Debug, Default)]
pub struct ValueFromPercentCalculator;

impl CalculatorPlugin for ValueFromPercentCalculator {
    fn kind(&self) -> CalculationKind {
        CalculationKind::ValueFromPercent
    }

    fn compute(&self, inputs: &CalculatorInputs<'_>) -> Result<f64, InputError> {
        let percentage = inputs.get("percentage")?;
        let total = inputs.get("totalValue")?;
        Ok((percentage / 100.0) * total)
    }

    fn formula(&self, _inputs: &CalculatorInputs<'_>, locale: Locale) -> &'static str {
        texts::formula_label(CalculationKind::ValueFromPercent, locale)
    }

    fn explain(&self, inputs: &CalculatorInputs<'_>, result: f64, locale: Locale) -> String {
        let percentage = inputs.get_or_zero("percentage");
        let total = inputs.get_or_zero("totalValue");
        let title = texts::kind_title(CalculationKind::ValueFromPercent, locale).to_lowercase();
        format!("{percentage}% {title} {total} = {result}")
    }
}
