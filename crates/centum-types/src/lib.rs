//! Centum Types
//!
//! This crate defines the core types and data structures shared across the
//! Centum ecosystem (currently `centum-core` and `centum-calculator`). It
//! provides the closed set of calculation kinds, the immutable calculation
//! record, the display locale, and the bilingual string tables that back
//! formula labels and explanation sentences.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;

/// Bilingual (Vietnamese/English) display strings.
pub mod texts;

pub use types::{CalculationKind, CalculationResult, Locale};
