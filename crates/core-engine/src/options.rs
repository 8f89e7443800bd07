use core_config::{Config, LineEndingSetting};
use core_text::LineEnding;

/// Per-engine behavior knobs, usually derived from the loaded `Config`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineOptions {
    /// Separator used when serializing lines back into one string.
    pub line_ending: LineEnding,
    /// Extra chars that count as word characters for word-wise motion.
    pub extra_word_chars: String,
}

impl EngineOptions {
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

impl From<&Config> for EngineOptions {
    fn from(config: &Config) -> Self {
        let line_ending = match config.line_ending() {
            LineEndingSetting::Lf => LineEnding::Lf,
            LineEndingSetting::Crlf => LineEnding::Crlf,
            LineEndingSetting::Cr => LineEnding::Cr,
        };
        Self {
            line_ending,
            extra_word_chars: config.extra_word_chars().to_string(),
        }
    }
}
