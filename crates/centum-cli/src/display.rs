//! Console implementations of the session's sinks.

use centum_core::{ResultSink, SpeechSink};
use centum_types::{CalculationResult, Locale, texts};

/// Prints completed results with localized labels.
pub struct ConsoleDisplay {
    locale: Locale,
}

impl ConsoleDisplay {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl ResultSink for ConsoleDisplay {
    fn present(&self, result: &CalculationResult) {
        println!("{}: {}", texts::result_word(self.locale), result.result);
        println!("{}: {}", texts::formula_word(self.locale), result.formula);
        println!("{}: {}", texts::explanation_word(self.locale), result.explanation);
    }
}

/// Renders the spoken read-out as a console line, tagged with the voice the
/// utterance would use.
pub struct ConsoleSpeech;

impl SpeechSink for ConsoleSpeech {
    fn speak(&self, utterance: &str, locale: Locale) {
        println!("🔊 [{}] {}", locale.speech_tag(), utterance);
    }
}
