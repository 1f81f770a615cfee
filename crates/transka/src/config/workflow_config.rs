use crate::config::{
    default_double_press_actions, default_double_press_ms, default_translation_timeout_secs,
};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use transka_core::HotkeyAction;

/// Timing of the hotkey workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Maximum gap between the two presses of a double-press.
    #[serde(default = "default_double_press_ms")]
    pub double_press_ms: u64,

    /// How long a translation may take before it is reported as failed.
    #[serde(default = "default_translation_timeout_secs")]
    pub translation_timeout_secs: u64,

    /// Actions that only fire on a double-press.
    #[serde(default = "default_double_press_actions")]
    pub double_press_actions: Vec<HotkeyAction>,
}

impl WorkflowConfig {
    /// Double-press window.
    pub fn double_press_threshold(&self) -> Duration {
        Duration::from_millis(self.double_press_ms)
    }

    /// Per-request translation timeout.
    pub fn translation_timeout(&self) -> Duration {
        Duration::from_secs(self.translation_timeout_secs)
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            double_press_ms: default_double_press_ms(),
            translation_timeout_secs: default_translation_timeout_secs(),
            double_press_actions: default_double_press_actions(),
        }
    }
}
