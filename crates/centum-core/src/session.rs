//! The calculation session.
//!
//! One user-triggered calculation at a time: validate, compute, stamp,
//! fan out. A rejected input set produces no result and leaves the history
//! untouched; an accepted one reaches every registered collaborator.

use crate::error::CentumResult;
use crate::history::HistoryLog;
use crate::preferences;
use crate::sinks::{ResultSink, SpeechSink};
use crate::storage::StorageProvider;
use centum_calculator::{Calculator, InputError};
use centum_types::{CalculationKind, CalculationResult, texts};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Pacing delay the interactive surface uses between computing and
/// presenting, mirroring the original calculator's loading animation.
pub const DEFAULT_PACING: Duration = Duration::from_millis(300);

/// Orchestrates one calculation per explicit user action.
pub struct CalculationSession {
    calculator: Calculator,
    history: HistoryLog,
    displays: Vec<Box<dyn ResultSink>>,
    speech: Option<Box<dyn SpeechSink>>,
    voice_enabled: bool,
    pacing: Option<Duration>,
}

impl CalculationSession {
    /// Create a session over the given storage backend, loading whatever
    /// history snapshot it holds.
    #[instrument(skip(storage))]
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        info!("Creating calculation session");
        Self {
            calculator: Calculator::new(),
            history: HistoryLog::load(storage),
            displays: Vec::new(),
            speech: None,
            voice_enabled: false,
            pacing: None,
        }
    }

    /// Enable the pacing delay. Purely a UX device; tests leave it off.
    pub fn with_pacing(mut self, delay: Duration) -> Self {
        self.pacing = Some(delay);
        self
    }

    /// Register a display sink; every completed result reaches all of them.
    pub fn register_display(&mut self, sink: Box<dyn ResultSink>) {
        self.displays.push(sink);
    }

    /// Install the speech capability. It only fires while the voice toggle
    /// is on.
    pub fn set_speech(&mut self, sink: Box<dyn SpeechSink>) {
        self.speech = Some(sink);
    }

    /// Toggle the spoken read-out of completed results.
    pub fn set_voice_enabled(&mut self, enabled: bool) {
        self.voice_enabled = enabled;
    }

    /// The session's history log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Clear the history and drop its persisted snapshot.
    pub fn clear_history(&mut self) -> CentumResult<()> {
        info!("Clearing calculation history");
        self.history.clear()
    }

    /// Run one calculation over raw string inputs.
    ///
    /// On rejection the classified failure is returned for user notification
    /// and nothing else happens. On success the result is timestamped and
    /// handed to every display sink, the speech sink when the voice toggle is
    /// on, and the history log. A history persistence failure is logged and
    /// absorbed; it never fails the calculation.
    #[instrument(skip(self, raw))]
    pub fn calculate(
        &mut self,
        kind: CalculationKind,
        raw: &HashMap<String, String>,
    ) -> Result<CalculationResult, InputError> {
        let locale = preferences::active_locale();
        let evaluation = self.calculator.evaluate(kind, raw, locale)?;

        if let Some(delay) = self.pacing {
            std::thread::sleep(delay);
        }

        let result = CalculationResult {
            kind,
            inputs: evaluation.inputs,
            result: evaluation.result,
            formula: evaluation.formula,
            explanation: evaluation.explanation,
            timestamp: Utc::now(),
        };

        for sink in &self.displays {
            sink.present(&result);
        }

        if self.voice_enabled {
            if let Some(speech) = &self.speech {
                let utterance = format!(
                    "{}: {}. {}",
                    texts::result_word(locale),
                    result.result,
                    result.explanation
                );
                speech.speak(&utterance, locale);
            }
        }

        if let Err(err) = self.history.record(result.clone()) {
            warn!(error = %err, "Failed to persist calculation history");
        }

        info!(kind = kind.as_str(), result = result.result, "Calculation completed");
        Ok(result)
    }
}
