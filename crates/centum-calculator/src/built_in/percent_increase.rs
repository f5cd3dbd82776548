//! Calculator for increasing or decreasing a value by a percentage.
//!
//! The sign of `percentage` only changes the framing: the formula label and
//! explanation switch between increase and decrease wording, while the
//! arithmetic is identical either way.

use crate::error::InputError;
use crate::plugin::{CalculatorInputs, CalculatorPlugin};
use centum_types::{CalculationKind, Locale, texts};

/// Calculator for percent increase/decrease operations
///
/// # Arguments
/// * `originalValue` - Starting value
/// * `percentage` - Signed percentage to apply (e.g., 15 or -15)
#[derive(Debug, Default)]
pub struct PercentIncreaseCalculator;

impl CalculatorPlugin for PercentIncreaseCalculator {
    fn kind(&self) -> CalculationKind {
        CalculationKind::PercentIncrease
    }

    fn compute(&self, inputs: &CalculatorInputs<'_>) -> Result<f64, InputError> {
        let original = inputs.get("originalValue")?;
        let percentage = inputs.get("percentage")?;
        // Additive form: adding the rounded percentage share keeps round
        // inputs round (100 + 15% is exactly 115, not 114.99999999999999).
        Ok(original + original * (percentage / 100.0))
    }

    fn formula(&self, inputs: &CalculatorInputs<'_>, locale: Locale) -> &'static str {
        if inputs.get_or_zero("percentage") > 0.0 {
            texts::formula_label(CalculationKind::PercentIncrease, locale)
        } else {
            texts::formula_label_decrease(locale)
        }
    }

    fn explain(&self, inputs: &CalculatorInputs<'_>, result: f64, _locale: Locale) -> String {
        let original = inputs.get_or_zero("originalValue");
        let percentage = inputs.get_or_zero("percentage");
        // A negative percentage renders its own minus sign.
        let sign = if percentage > 0.0 { "+" } else { "" };
        format!("{original} {sign}{percentage}% = {result}")
    }
}
