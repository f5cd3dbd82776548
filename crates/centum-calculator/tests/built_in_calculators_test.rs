use std::collections::HashMap;

use centum_calculator::built_in::percent_difference::PercentDifferenceCalculator;
use centum_calculator::built_in::percent_increase::PercentIncreaseCalculator;
use centum_calculator::built_in::percent_of::PercentOfCalculator;
use centum_calculator::built_in::value_from_percent::ValueFromPercentCalculator;
use centum_calculator::built_in::what_percent::WhatPercentCalculator;
use centum_calculator::plugin::{CalculatorInputs, CalculatorPlugin};
use centum_calculator::{Calculator, InputError};
use centum_types::{CalculationKind, Locale};

fn compute_with<C: CalculatorPlugin>(calculator: C, inputs: &[(&str, f64)]) -> f64 {
    let values: HashMap<String, f64> = inputs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    calculator.compute(&CalculatorInputs::new(&values)).unwrap()
}

fn raw(inputs: &[(&str, &str)]) -> HashMap<String, String> {
    inputs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn percent_of_calculator_works() {
    let result = compute_with(
        PercentOfCalculator,
        &[("percentage", 25.0), ("value", 200.0)],
    );
    assert_eq!(result, 50.0);
}

#[test]
fn what_percent_calculator_works() {
    let result = compute_with(
        WhatPercentCalculator,
        &[("partValue", 50.0), ("totalValue", 200.0)],
    );
    assert_eq!(result, 25.0);
}

#[test]
fn percent_increase_calculator_works() {
    let result = compute_with(
        PercentIncreaseCalculator,
        &[("originalValue", 100.0), ("percentage", 15.0)],
    );
    assert_eq!(result, 115.0);
}

#[test]
fn percent_decrease_uses_same_formula() {
    let result = compute_with(
        PercentIncreaseCalculator,
        &[("originalValue", 100.0), ("percentage", -15.0)],
    );
    assert_eq!(result, 85.0);
}

#[test]
fn percent_difference_calculator_works() {
    let result = compute_with(
        PercentDifferenceCalculator,
        &[("firstValue", 100.0), ("secondValue", 120.0)],
    );
    assert_eq!(result, 20.0);
}

#[test]
fn value_from_percent_calculator_works() {
    let result = compute_with(
        ValueFromPercentCalculator,
        &[("percentage", 30.0), ("totalValue", 500.0)],
    );
    assert_eq!(result, 150.0);
}

#[test]
fn facade_runs_the_full_pipeline() {
    let calculator = Calculator::new();
    let evaluation = calculator
        .evaluate(
            CalculationKind::PercentOf,
            &raw(&[("percentage", "25"), ("value", "200")]),
            Locale::En,
        )
        .unwrap();

    assert_eq!(evaluation.result, 50.0);
    assert_eq!(evaluation.formula, "(percentage ÷ 100) × value");
    assert_eq!(evaluation.explanation, "25% x% of y 200 = 50");
    assert_eq!(evaluation.inputs["percentage"], 25.0);
}

#[test]
fn facade_rejects_division_by_zero() {
    let calculator = Calculator::new();
    let err = calculator
        .evaluate(
            CalculationKind::WhatPercent,
            &raw(&[("partValue", "50"), ("totalValue", "0")]),
            Locale::En,
        )
        .unwrap_err();

    assert_eq!(err, InputError::DivisionByZero { field: "totalValue".to_string() });
    assert_eq!(err.user_message(Locale::En), "Cannot divide by zero");
    assert_eq!(err.user_message(Locale::Vi), "Không thể chia cho 0");
}

#[test]
fn facade_rejects_unparseable_input_as_invalid_number() {
    let calculator = Calculator::new();
    let err = calculator
        .evaluate(
            CalculationKind::PercentOf,
            &raw(&[("percentage", "25"), ("value", "not a number")]),
            Locale::En,
        )
        .unwrap_err();

    assert_eq!(err, InputError::InvalidNumber { field: "value".to_string() });
    assert_eq!(err.user_message(Locale::En), "Please enter a valid number");
}

#[test]
fn what_percent_explanation_rounds_to_two_decimals() {
    let calculator = Calculator::new();
    let evaluation = calculator
        .evaluate(
            CalculationKind::WhatPercent,
            &raw(&[("partValue", "1"), ("totalValue", "3")]),
            Locale::En,
        )
        .unwrap();

    assert_eq!(evaluation.explanation, "1 what percent is y of x 3 = 33.33%");
}

#[test]
fn percent_increase_label_depends_on_sign() {
    let calculator = Calculator::new();
    let increase = calculator
        .evaluate(
            CalculationKind::PercentIncrease,
            &raw(&[("originalValue", "100"), ("percentage", "15")]),
            Locale::En,
        )
        .unwrap();
    assert_eq!(increase.formula, "original value × (1 + percentage ÷ 100)");
    assert_eq!(increase.explanation, "100 +15% = 115");

    let decrease = calculator
        .evaluate(
            CalculationKind::PercentIncrease,
            &raw(&[("originalValue", "100"), ("percentage", "-15")]),
            Locale::En,
        )
        .unwrap();
    assert_eq!(decrease.formula, "original value × (1 - percentage ÷ 100)");
    assert_eq!(decrease.explanation, "100 -15% = 85");
}

#[test]
fn percent_difference_explanation_uses_arrow() {
    let calculator = Calculator::new();
    let evaluation = calculator
        .evaluate(
            CalculationKind::PercentDifference,
            &raw(&[("firstValue", "100"), ("secondValue", "120")]),
            Locale::En,
        )
        .unwrap();

    assert_eq!(evaluation.explanation, "Percentage difference: 100 → 120 = 20.00%");
}

#[test]
fn vietnamese_locale_renders_vietnamese_strings() {
    let calculator = Calculator::new();
    let evaluation = calculator
        .evaluate(
            CalculationKind::PercentOf,
            &raw(&[("percentage", "25"), ("value", "200")]),
            Locale::Vi,
        )
        .unwrap();

    assert_eq!(evaluation.formula, "(phần trăm ÷ 100) × giá trị");
    assert_eq!(evaluation.explanation, "25% x% của y 200 = 50");
}
