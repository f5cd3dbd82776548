//! Calculator for finding what percent one value is of another.
//!
//! The validator guarantees `totalValue` is never zero here.

use crate::error::InputError;
use crate::plugin::{CalculatorInputs, CalculatorPlugin};
use centum_types::{CalculationKind, Locale, texts};

/// Calculator for what-percent operations
///
/// # Arguments
/// * `partValue` - The part being measured
/// * `totalValue` - The whole it is measured against (non-zero)
#[derive(Debug, Default)]
pub struct WhatPercentCalculator;

impl CalculatorPlugin for WhatPercentCalculator {
    fn kind(&self) -> CalculationKind {
        CalculationKind::WhatPercent
    }

    fn compute(&self, inputs: &CalculatorInputs<'_>) -> Result<f64, InputError> {
        let part = inputs.get("partValue")?;
        let total = inputs.get("totalValue")?;
        Ok((part / total) * 100.0)
    }

    fn formula(&self, _inputs: &CalculatorInputs<'_>, locale: Locale) -> &'static str {
        texts::formula_label(CalculationKind::WhatPercent, locale)
    }

    fn explain(&self, inputs: &CalculatorInputs<'_>, result: f64, locale: Locale) -> String {
        let part = inputs.get_or_zero("partValue");
        let total = inputs.get_or_zero("totalValue");
        let title = texts::kind_title(CalculationKind::WhatPercent, locale).to_lowercase();
        format!("{part} {title} {total} = {result:.2}%")
    }
}
