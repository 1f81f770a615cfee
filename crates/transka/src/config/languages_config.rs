use crate::config::{default_source_language, default_target_language};

use serde::{Deserialize, Serialize};
use transka_core::LanguagePair;

/// Translation direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagesConfig {
    /// Source language code, or `AUTO` to let the backend detect it.
    #[serde(default = "default_source_language")]
    pub source: String,

    /// Target language code.
    #[serde(default = "default_target_language")]
    pub target: String,
}

impl LanguagesConfig {
    /// The configured pair.
    pub fn pair(&self) -> LanguagePair {
        LanguagePair::new(self.source.trim(), self.target.trim())
    }

    /// Stores `pair`, returning whether anything changed.
    pub fn set_pair(&mut self, pair: &LanguagePair) -> bool {
        if self.pair() == *pair {
            return false;
        }
        self.source = pair.source.clone();
        self.target = pair.target.clone();
        true
    }
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            source: default_source_language(),
            target: default_target_language(),
        }
    }
}
