use crate::built_in::{
    percent_difference::PercentDifferenceCalculator, percent_increase::PercentIncreaseCalculator,
    percent_of::PercentOfCalculator, value_from_percent::ValueFromPercentCalculator,
    what_percent::WhatPercentCalculator,
};
use crate::error::InputError;
use crate::plugin::CalculatorInputs;
use crate::plugin_manager::PluginRegistry;
use crate::validator;
use centum_types::{CalculationKind, Locale};
use std::collections::HashMap;

/// What the formula engine hands back for one accepted input set.
///
/// Carries no timestamp; the calculation session stamps the instant when it
/// assembles the final record.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The resolved numeric inputs the formula ran over.
    pub inputs: HashMap<String, f64>,
    /// The computed number.
    pub result: f64,
    /// Locale-specific symbolic formula label.
    pub formula: String,
    /// Locale-specific explanation sentence.
    pub explanation: String,
}

/// Facade over the plugin registry: parse, validate, compute, render.
pub struct Calculator {
    registry: PluginRegistry,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(PercentOfCalculator));
        registry.register(Box::new(WhatPercentCalculator));
        registry.register(Box::new(PercentIncreaseCalculator));
        registry.register(Box::new(PercentDifferenceCalculator));
        registry.register(Box::new(ValueFromPercentCalculator));
        Self { registry }
    }

    /// Runs one calculation over raw string inputs.
    ///
    /// Returns a classified [`InputError`] when validation rejects the input
    /// set. Any unexpected engine failure after validation (a missing plugin,
    /// a non-finite result) degrades to the generic `InvalidNumber`
    /// classification instead of propagating as a fault.
    pub fn evaluate(
        &self,
        kind: CalculationKind,
        raw: &HashMap<String, String>,
        locale: Locale,
    ) -> Result<Evaluation, InputError> {
        let values = validator::parse_inputs(raw);
        validator::validate(kind, &values)?;

        let plugin = self
            .registry
            .get(kind)
            .ok_or_else(|| InputError::InvalidNumber { field: kind.as_str().to_string() })?;

        let inputs = CalculatorInputs::new(&values);
        let result = plugin.compute(&inputs)?;
        if !result.is_finite() {
            return Err(InputError::InvalidNumber { field: "result".to_string() });
        }

        let formula = plugin.formula(&inputs, locale).to_string();
        let explanation = plugin.explain(&inputs, result, locale);
        Ok(Evaluation { inputs: values, result, formula, explanation })
    }
}
