use crate::error::InputError;
use centum_types::{CalculationKind, Locale};
use std::collections::HashMap;

/// Provides a safe interface for plugins to read validated numeric inputs.
#[derive(Debug)]
pub struct CalculatorInputs<'a> {
    values: &'a HashMap<String, f64>,
}

impl<'a> CalculatorInputs<'a> {
    /// Creates a new `CalculatorInputs` over a resolved numeric input set.
    pub fn new(values: &'a HashMap<String, f64>) -> Self {
        Self { values }
    }

    /// Gets a numeric value from the inputs.
    pub fn get(&self, name: &str) -> Result<f64, InputError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| InputError::InvalidNumber { field: name.to_string() })
    }

    /// Gets a numeric value, falling back to zero when the field is absent.
    /// Used for presentation paths that must not fail.
    pub fn get_or_zero(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }
}

/// A trait for percentage calculators.
/// Calculators are stateless and thread-safe.
pub trait CalculatorPlugin: Send + Sync {
    /// The calculation kind this plugin implements.
    fn kind(&self) -> CalculationKind;

    /// Computes the numeric result from validated inputs.
    fn compute(&self, inputs: &CalculatorInputs<'_>) -> Result<f64, InputError>;

    /// The symbolic formula label for the given inputs and locale.
    fn formula(&self, inputs: &CalculatorInputs<'_>, locale: Locale) -> &'static str;

    /// Renders the explanation sentence embedding the inputs and the result.
    fn explain(&self, inputs: &CalculatorInputs<'_>, result: f64, locale: Locale) -> String;
}
