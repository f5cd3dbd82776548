#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for the Centum percentage calculator.
//!
//! This crate orchestrates one calculation at a time: it validates input
//! through the formula engine, stamps accepted results, fans them out to the
//! registered sinks, and mirrors a capped history of past results into
//! durable storage.

/// Structured error handling for core operations
pub mod error;
/// Capped, persisted, newest-first log of past results
pub mod history;
/// Process-wide display-locale state and its persistence
pub mod preferences;
/// Read-only projections over the result stream
pub mod projections;
/// Calculation session driving validate, compute, and fan-out
pub mod session;
/// Display and speech sink traits
pub mod sinks;
/// Key-value storage providers backing persistence
pub mod storage;

pub use error::{CentumError, CentumResult};
pub use history::{HISTORY_CAP, HistoryLog};
pub use session::CalculationSession;
pub use sinks::{ResultSink, SpeechSink};
pub use storage::{
    FileStorageProvider, HISTORY_KEY, LANGUAGE_KEY, MemoryStorageProvider, StorageProvider,
};
