use crate::LanguagePair;

/// Position in the show / translate / copy cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// Surface hidden; the next main press reveals it.
    #[default]
    Hidden,
    /// Surface visible, waiting for the translate press.
    Shown,
    /// Output holds a translation; the next main press copies and hides.
    Translated,
}

/// What the host sees after every workflow change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSnapshot {
    /// Current cycle position.
    pub state: WorkflowState,
    /// Whether a translation request is in flight.
    pub translating: bool,
    /// Language pair in effect.
    pub languages: LanguagePair,
}
