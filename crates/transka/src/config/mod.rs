mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod hotkeys_config;
mod languages_config;
mod translator_config;
mod workflow_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, config::Config, hotkeys_config::HotkeysConfig,
    languages_config::LanguagesConfig, translator_config::TranslatorConfig,
    workflow_config::WorkflowConfig,
};

use transka_core::HotkeyAction;

pub(crate) const DEFAULT_SOURCE_LANGUAGE: &str = "CS";
pub(crate) const DEFAULT_TARGET_LANGUAGE: &str = "EN-US";
pub(crate) const DEFAULT_MAIN_HOTKEY: &str = "ctrl+alt+t";
pub(crate) const DEFAULT_SWAP_HOTKEY: &str = "ctrl+alt+s";
pub(crate) const DEFAULT_CLEAR_HOTKEY: &str = "ctrl+alt+c";
pub(crate) const DEFAULT_DOUBLE_PRESS_MS: u64 = 500;
pub(crate) const DEFAULT_TRANSLATION_TIMEOUT_SECS: u64 = 15;
pub(crate) const DEFAULT_AUTO_PASTE: bool = false;
pub(crate) const DEFAULT_NOTIFICATIONS: bool = true;

pub(crate) fn default_source_language() -> String {
    DEFAULT_SOURCE_LANGUAGE.to_string()
}

pub(crate) fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}

pub(crate) fn default_main_hotkey() -> String {
    DEFAULT_MAIN_HOTKEY.to_string()
}

pub(crate) fn default_swap_hotkey() -> String {
    DEFAULT_SWAP_HOTKEY.to_string()
}

pub(crate) fn default_clear_hotkey() -> String {
    DEFAULT_CLEAR_HOTKEY.to_string()
}

pub(crate) fn default_double_press_ms() -> u64 {
    DEFAULT_DOUBLE_PRESS_MS
}

pub(crate) fn default_translation_timeout_secs() -> u64 {
    DEFAULT_TRANSLATION_TIMEOUT_SECS
}

pub(crate) fn default_double_press_actions() -> Vec<HotkeyAction> {
    HotkeyAction::ALL.to_vec()
}

pub(crate) fn default_auto_paste() -> bool {
    DEFAULT_AUTO_PASTE
}

pub(crate) fn default_notifications() -> bool {
    DEFAULT_NOTIFICATIONS
}
