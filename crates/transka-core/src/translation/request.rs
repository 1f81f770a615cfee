use std::fmt;

/// Source language code meaning "let the backend detect it".
pub const AUTO_DETECT: &str = "AUTO";

/// Outcome of one translation as seen by the state machine.
///
/// Backend errors are already converted to a displayable message.
pub type TranslationResult = Result<String, String>;

/// Source and target language codes, e.g. `CS` and `EN-US`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    /// Language of the input text.
    pub source: String,
    /// Language to translate into.
    pub target: String,
}

impl LanguagePair {
    /// Creates a pair from any string-like codes.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The pair with source and target exchanged.
    ///
    /// `None` when the source is auto-detect, which is not a valid target.
    pub fn swapped(&self) -> Option<LanguagePair> {
        if self.source.eq_ignore_ascii_case(AUTO_DETECT) {
            return None;
        }
        Some(LanguagePair {
            source: self.target.clone(),
            target: self.source.clone(),
        })
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

/// Snapshot of what to translate, taken when translation is triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Trimmed input text.
    pub text: String,
    /// Languages in effect at capture time.
    pub languages: LanguagePair,
}

impl TranslationRequest {
    /// Captures a request, or `None` if there is nothing to translate.
    pub fn capture(text: &str, languages: &LanguagePair) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            languages: languages.clone(),
        })
    }
}

/// What triggered a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationOrigin {
    /// The main hotkey in `Shown`; success advances to `Translated`.
    Hotkey,
    /// Translate button or Ctrl+Enter; success leaves the state alone.
    Manual,
}

/// A request the state machine wants dispatched to the translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTranslation {
    /// Monotonic tag; results carrying an older tag are discarded.
    pub sequence: u64,
    /// What triggered it.
    pub origin: TranslationOrigin,
    /// The captured request.
    pub request: TranslationRequest,
}
