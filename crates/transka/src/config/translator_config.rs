use serde::{Deserialize, Serialize};

/// External translation command.
///
/// The command receives the text on stdin and prints the translation on
/// stdout. `{source}` and `{target}` in `args` are replaced with the language
/// codes of each request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Program to run. Empty means no translator is configured.
    #[serde(default)]
    pub command: String,

    /// Arguments passed to `command`.
    #[serde(default)]
    pub args: Vec<String>,
}

impl TranslatorConfig {
    /// Whether a command has been set.
    pub fn is_configured(&self) -> bool {
        !self.command.trim().is_empty()
    }
}
