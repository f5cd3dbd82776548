use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of percentage operations supported by the engine.
///
/// Each kind determines which input fields are required and which formula
/// applies. Variants serialize under their camelCase wire names so persisted
/// snapshots stay readable by earlier releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculationKind {
    /// X% of Y
    PercentOf,
    /// What percent is Y of X
    WhatPercent,
    /// Increase/decrease a value by a percentage
    PercentIncrease,
    /// Absolute percentage difference between two values
    PercentDifference,
    /// Find the value a percentage represents of a total
    ValueFromPercent,
}

impl CalculationKind {
    /// Every kind, in the order the original calculator presents them.
    pub const ALL: [Self; 5] = [
        Self::PercentOf,
        Self::WhatPercent,
        Self::PercentIncrease,
        Self::PercentDifference,
        Self::ValueFromPercent,
    ];

    /// The camelCase wire name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PercentOf => "percentOf",
            Self::WhatPercent => "whatPercent",
            Self::PercentIncrease => "percentIncrease",
            Self::PercentDifference => "percentDifference",
            Self::ValueFromPercent => "valueFromPercent",
        }
    }

    /// Input fields that must carry a usable number for this kind.
    #[must_use]
    pub const fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::PercentOf => &["percentage", "value"],
            Self::WhatPercent => &["partValue", "totalValue"],
            Self::PercentIncrease => &["originalValue", "percentage"],
            Self::PercentDifference => &["firstValue", "secondValue"],
            Self::ValueFromPercent => &["percentage", "totalValue"],
        }
    }

    /// The field this kind divides by, if any.
    #[must_use]
    pub const fn denominator_field(&self) -> Option<&'static str> {
        match self {
            Self::WhatPercent => Some("totalValue"),
            Self::PercentDifference => Some("firstValue"),
            _ => None,
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentOf" => Ok(Self::PercentOf),
            "whatPercent" => Ok(Self::WhatPercent),
            "percentIncrease" => Ok(Self::PercentIncrease),
            "percentDifference" => Ok(Self::PercentDifference),
            "valueFromPercent" => Ok(Self::ValueFromPercent),
            other => Err(format!("unknown calculation kind '{other}'")),
        }
    }
}

/// The immutable outcome of one successful calculation.
///
/// Created only by the calculation session once validation has passed and the
/// formula engine has produced a number; never mutated afterwards. Timestamps
/// persist as millisecond epoch values, the format the original snapshots use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Which operation produced this result.
    #[serde(rename = "type")]
    pub kind: CalculationKind,
    /// The resolved numeric inputs the formula ran over, keyed by field name.
    pub inputs: HashMap<String, f64>,
    /// The computed number.
    pub result: f64,
    /// Locale-specific symbolic formula label, fixed per kind.
    pub formula: String,
    /// Human-readable sentence embedding the inputs and the result.
    pub explanation: String,
    /// Instant the session completed the calculation.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Display locale for formula labels, explanations, and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Vietnamese
    Vi,
    /// English
    En,
}

impl Locale {
    /// The two-letter language code (`"vi"` / `"en"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }

    /// Resolve a locale from a reported language tag such as `vi-VN` or
    /// `en_US.UTF-8`. Any tag mentioning Vietnamese maps to [`Locale::Vi`];
    /// everything else falls back to English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_lowercase().contains("vi") { Self::Vi } else { Self::En }
    }

    /// BCP 47 tag handed to speech synthesis.
    #[must_use]
    pub const fn speech_tag(&self) -> &'static str {
        match self {
            Self::Vi => "vi-VN",
            Self::En => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
