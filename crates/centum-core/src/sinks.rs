//! Collaborator traits the session fans completed results out to.
//!
//! Both are injected capabilities so tests can observe the fan-out with
//! recording doubles instead of a real terminal or speech synthesizer.

use centum_types::{CalculationResult, Locale};

/// Receives every completed calculation for immediate display.
pub trait ResultSink: Send + Sync {
    fn present(&self, result: &CalculationResult);
}

/// Optional spoken read-out of a completed calculation.
///
/// Fire-and-forget: the session never waits for an acknowledgment.
pub trait SpeechSink: Send + Sync {
    fn speak(&self, utterance: &str, locale: Locale);
}
