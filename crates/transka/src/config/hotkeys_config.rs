use crate::config::{default_clear_hotkey, default_main_hotkey, default_swap_hotkey};

use serde::{Deserialize, Serialize};
use transka_core::HotkeyAction;

/// Key combinations, written like `"ctrl+alt+t"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeysConfig {
    /// Drives the show / translate / copy cycle.
    #[serde(default = "default_main_hotkey")]
    pub main: String,

    /// Swaps source and target language.
    #[serde(default = "default_swap_hotkey")]
    pub swap: String,

    /// Clears the input.
    #[serde(default = "default_clear_hotkey")]
    pub clear: String,
}

impl HotkeysConfig {
    /// Combination configured for `action`.
    pub fn get(&self, action: HotkeyAction) -> &str {
        match action {
            HotkeyAction::Main => &self.main,
            HotkeyAction::Swap => &self.swap,
            HotkeyAction::Clear => &self.clear,
        }
    }

    /// Every action paired with its combination.
    pub fn bindings(&self) -> Vec<(HotkeyAction, String)> {
        HotkeyAction::ALL
            .iter()
            .map(|action| (*action, self.get(*action).to_string()))
            .collect()
    }
}

impl Default for HotkeysConfig {
    fn default() -> Self {
        Self {
            main: default_main_hotkey(),
            swap: default_swap_hotkey(),
            clear: default_clear_hotkey(),
        }
    }
}
