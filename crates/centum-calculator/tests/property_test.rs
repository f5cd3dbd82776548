use std::collections::HashMap;

use centum_calculator::built_in::percent_difference::PercentDifferenceCalculator;
use centum_calculator::built_in::percent_of::PercentOfCalculator;
use centum_calculator::built_in::value_from_percent::ValueFromPercentCalculator;
use centum_calculator::built_in::what_percent::WhatPercentCalculator;
use centum_calculator::plugin::{CalculatorInputs, CalculatorPlugin};
use proptest::prelude::*;

fn numeric(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

proptest! {
    // percentOf and valueFromPercent are algebraically the same operation and
    // must agree bit-for-bit on equal inputs.
    #[test]
    fn percent_of_matches_value_from_percent(
        percentage in -1.0e6f64..1.0e6,
        value in -1.0e9f64..1.0e9,
    ) {
        let of = PercentOfCalculator
            .compute(&CalculatorInputs::new(&numeric(&[
                ("percentage", percentage),
                ("value", value),
            ])))
            .unwrap();
        let from = ValueFromPercentCalculator
            .compute(&CalculatorInputs::new(&numeric(&[
                ("percentage", percentage),
                ("totalValue", value),
            ])))
            .unwrap();
        prop_assert_eq!(of.to_bits(), from.to_bits());
    }

    #[test]
    fn what_percent_matches_ratio(
        part in -1.0e9f64..1.0e9,
        total in prop::num::f64::NORMAL.prop_filter("non-zero total", |t| *t != 0.0),
    ) {
        let result = WhatPercentCalculator
            .compute(&CalculatorInputs::new(&numeric(&[
                ("partValue", part),
                ("totalValue", total),
            ])))
            .unwrap();
        prop_assert_eq!(result, (part / total) * 100.0);
    }

    // The difference is defined as an absolute value: never negative, and
    // swapping the inputs changes only the magnitude's denominator, not the
    // sign.
    #[test]
    fn percent_difference_is_non_negative(
        first in prop::num::f64::NORMAL,
        second in -1.0e9f64..1.0e9,
    ) {
        let result = PercentDifferenceCalculator
            .compute(&CalculatorInputs::new(&numeric(&[
                ("firstValue", first),
                ("secondValue", second),
            ])))
            .unwrap();
        prop_assert!(result >= 0.0);
    }

    #[test]
    fn percent_difference_swap_stays_non_negative(
        first in prop::num::f64::NORMAL,
        second in prop::num::f64::NORMAL,
    ) {
        let forward = PercentDifferenceCalculator
            .compute(&CalculatorInputs::new(&numeric(&[
                ("firstValue", first),
                ("secondValue", second),
            ])))
            .unwrap();
        let swapped = PercentDifferenceCalculator
            .compute(&CalculatorInputs::new(&numeric(&[
                ("firstValue", second),
                ("secondValue", first),
            ])))
            .unwrap();
        prop_assert!(forward >= 0.0);
        prop_assert!(swapped >= 0.0);
    }
}
