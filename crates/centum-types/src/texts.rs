//! Bilingual string tables.
//!
//! Every user-facing string the engine emits lives here, keyed by
//! [`Locale`]. Formula labels and explanation templates must match the
//! wording the original calculator shipped with, so translations are fixed
//! tables rather than anything pluggable.

use crate::{CalculationKind, Locale};

/// Application title shown by interactive front-ends.
#[must_use]
pub const fn app_title(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "Máy Tính Phần Trăm",
        Locale::En => "Percentage Calculator",
    }
}

/// One-line subtitle under the application title.
#[must_use]
pub const fn app_subtitle(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "Tính toán phần trăm nhanh chóng và chính xác",
        Locale::En => "Fast and accurate percentage calculations",
    }
}

/// Display title of a calculation kind.
#[must_use]
pub const fn kind_title(kind: CalculationKind, locale: Locale) -> &'static str {
    match (kind, locale) {
        (CalculationKind::PercentOf, Locale::Vi) => "X% của Y",
        (CalculationKind::PercentOf, Locale::En) => "X% of Y",
        (CalculationKind::WhatPercent, Locale::Vi) => "Y là bao nhiêu % của X",
        (CalculationKind::WhatPercent, Locale::En) => "What percent is Y of X",
        (CalculationKind::PercentIncrease, Locale::Vi) => "Tăng/Giảm theo phần trăm",
        (CalculationKind::PercentIncrease, Locale::En) => "Increase/Decrease by percentage",
        (CalculationKind::PercentDifference, Locale::Vi) => "Chênh lệch phần trăm",
        (CalculationKind::PercentDifference, Locale::En) => "Percentage difference",
        (CalculationKind::ValueFromPercent, Locale::Vi) => "Tìm giá trị từ phần trăm",
        (CalculationKind::ValueFromPercent, Locale::En) => "Find value from percentage",
    }
}

/// Fixed symbolic formula label for a kind.
///
/// For [`CalculationKind::PercentIncrease`] this is the *increase* variant;
/// the decrease wording lives in [`formula_label_decrease`].
#[must_use]
pub const fn formula_label(kind: CalculationKind, locale: Locale) -> &'static str {
    match (kind, locale) {
        (CalculationKind::PercentOf, Locale::Vi) => "(phần trăm ÷ 100) × giá trị",
        (CalculationKind::PercentOf, Locale::En) => "(percentage ÷ 100) × value",
        (CalculationKind::WhatPercent, Locale::Vi) => "(giá trị ÷ tổng) × 100",
        (CalculationKind::WhatPercent, Locale::En) => "(value ÷ total) × 100",
        (CalculationKind::PercentIncrease, Locale::Vi) => "giá trị gốc × (1 + phần trăm ÷ 100)",
        (CalculationKind::PercentIncrease, Locale::En) => "original value × (1 + percentage ÷ 100)",
        (CalculationKind::PercentDifference, Locale::Vi) => {
            "|(giá trị mới - giá trị cũ) ÷ giá trị cũ| × 100"
        }
        (CalculationKind::PercentDifference, Locale::En) => {
            "|(new value - old value) ÷ old value| × 100"
        }
        (CalculationKind::ValueFromPercent, Locale::Vi) => "(phần trăm ÷ 100) × tổng giá trị",
        (CalculationKind::ValueFromPercent, Locale::En) => "(percentage ÷ 100) × total value",
    }
}

/// Decrease variant of the percent-increase formula label, used when the
/// entered percentage is not positive.
#[must_use]
pub const fn formula_label_decrease(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "giá trị gốc × (1 - phần trăm ÷ 100)",
        Locale::En => "original value × (1 - percentage ÷ 100)",
    }
}

/// The word "Result", used as the speech prefix and display heading.
#[must_use]
pub const fn result_word(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "Kết quả",
        Locale::En => "Result",
    }
}

/// The word "Formula".
#[must_use]
pub const fn formula_word(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "Công thức",
        Locale::En => "Formula",
    }
}

/// The word "Explanation".
#[must_use]
pub const fn explanation_word(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "Giải thích",
        Locale::En => "Explanation",
    }
}

/// Heading above the calculation history.
#[must_use]
pub const fn recent_calculations(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "Tính toán gần đây",
        Locale::En => "Recent calculations",
    }
}

/// Placeholder shown when the history is empty.
#[must_use]
pub const fn no_recent_calculations(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "Chưa có tính toán nào",
        Locale::En => "No recent calculations",
    }
}

/// Notification for a missing or unusable numeric input.
#[must_use]
pub const fn error_invalid_number(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "Vui lòng nhập số hợp lệ",
        Locale::En => "Please enter a valid number",
    }
}

/// Notification for a zero denominator.
#[must_use]
pub const fn error_division_by_zero(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "Không thể chia cho 0",
        Locale::En => "Cannot divide by zero",
    }
}
