#![deny(warnings)]
//! The formula engine for the Centum percentage calculator.
//!
//! This crate provides the `CalculatorPlugin` trait, one built-in plugin per
//! [`CalculationKind`](centum_types::CalculationKind), the input validator
//! that classifies unusable input before any formula runs, and the
//! `Calculator` facade that ties the three together.

pub mod built_in;
pub mod calculator;
pub mod error;
pub mod plugin;
pub mod plugin_manager;
pub mod validator;

pub use calculator::{Calculator, Evaluation};
pub use error::InputError;
pub use plugin::{CalculatorInputs, CalculatorPlugin};
pub use plugin_manager::PluginRegistry;
