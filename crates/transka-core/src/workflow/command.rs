use crate::{HotkeyAction, LanguagePair, TranslationResult};

/// Commands applied, in order, on the workflow's UI execution context.
#[derive(Debug, Clone)]
pub enum WorkflowCommand {
    /// A confirmed hotkey action.
    Action(HotkeyAction),
    /// Translate the current input without advancing the cycle.
    Translate,
    /// A background translation completed.
    TranslationFinished {
        /// Sequence number the request was issued with.
        sequence: u64,
        /// Translated text or displayable error.
        result: TranslationResult,
    },
    /// Hide the surface (close button, escape, tray menu).
    Hide,
    /// Replace the language pair, e.g. after a settings reload.
    SetLanguages(LanguagePair),
    /// Stop the driver loop.
    Shutdown,
}
