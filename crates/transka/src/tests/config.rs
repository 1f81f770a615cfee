use crate::{
    AppError,
    config::{Config, LanguagesConfig},
};

use std::{fs, path::PathBuf, time::Duration};

use transka_core::{HotkeyAction, LanguagePair};
use uuid::Uuid;

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("transka-test-{}", Uuid::new_v4()));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// WHAT: Defaults match the documented first-run settings
/// WHY: A fresh install must work without editing the file
#[test]
fn given_no_file_when_using_defaults_then_documented_values() {
    // Given/When: The default config
    let config = Config::default();

    // Then: Documented defaults
    assert_eq!(config.languages.pair(), LanguagePair::new("CS", "EN-US"));
    assert_eq!(config.hotkeys.main, "ctrl+alt+t");
    assert_eq!(config.hotkeys.swap, "ctrl+alt+s");
    assert_eq!(config.hotkeys.clear, "ctrl+alt+c");
    assert_eq!(config.workflow.double_press_threshold(), Duration::from_millis(500));
    assert_eq!(config.workflow.translation_timeout(), Duration::from_secs(15));
    assert_eq!(config.workflow.double_press_actions, HotkeyAction::ALL.to_vec());
    assert!(!config.behavior.auto_paste);
    assert!(config.behavior.notifications);
    assert!(!config.translator.is_configured());
    assert!(config.validate().is_ok());
}

/// WHAT: Missing sections and fields fall back to defaults
/// WHY: Old config files must keep loading after new settings are added
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_toml_when_parsing_then_missing_fields_defaulted() {
    // Given: A file with only a few keys
    let toml_text = r#"
        [languages]
        target = "DE"

        [workflow]
        double_press_ms = 350
        double_press_actions = ["main"]

        [translator]
        command = "trans"
        args = ["-b", "{source}:{target}"]
    "#;

    // When: Parsing it
    let config: Config = toml::from_str(toml_text).unwrap();

    // Then: Given values kept, the rest defaulted
    assert_eq!(config.languages.pair(), LanguagePair::new("CS", "DE"));
    assert_eq!(config.workflow.double_press_ms, 350);
    assert_eq!(config.workflow.translation_timeout_secs, 15);
    assert_eq!(config.workflow.double_press_actions, vec![HotkeyAction::Main]);
    assert_eq!(config.hotkeys.main, "ctrl+alt+t");
    assert!(config.behavior.notifications);
    assert!(config.translator.is_configured());
    assert_eq!(config.translator.args, vec!["-b", "{source}:{target}"]);
}

/// WHAT: Unknown action names are rejected at parse time
/// WHY: A typo must not silently disable double-press for an action
#[test]
fn given_unknown_action_when_parsing_then_error() {
    // Given: A misspelled action
    let toml_text = r#"
        [workflow]
        double_press_actions = ["mian"]
    "#;

    // When: Parsing it
    let result = toml::from_str::<Config>(toml_text);

    // Then: Parse error
    assert!(result.is_err());
}

/// WHAT: Saved config loads back identically and leaves no temp file
/// WHY: Swapped languages are persisted through the atomic save
#[test]
#[allow(clippy::unwrap_used)]
fn given_modified_config_when_saved_and_loaded_then_identical() {
    // Given: A config with swapped languages
    let dir = scratch_dir();
    let path = dir.join("config.toml");
    let mut config = Config::default();
    config
        .languages
        .set_pair(&LanguagePair::new("EN-US", "CS"));
    config.behavior.auto_paste = true;

    // When: Saving and loading
    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    // Then: Identical, temp file gone
    assert_eq!(loaded, config);
    assert!(!path.with_extension("toml.tmp").exists());

    let _ = fs::remove_dir_all(dir);
}

/// WHAT: A malformed file is reported as a config error
/// WHY: Reload must keep the running settings when the file is broken
#[test]
fn given_malformed_file_when_loading_then_config_error() {
    // Given: A file that is not TOML
    let dir = scratch_dir();
    let path = dir.join("config.toml");
    let _ = fs::write(&path, "[languages\nsource = ");

    // When: Loading it
    let result = Config::load_from(&path);

    // Then: ConfigError
    assert!(matches!(result, Err(AppError::ConfigError { .. })));

    let _ = fs::remove_dir_all(dir);
}

/// WHAT: Zero timings and empty hotkeys fail validation
/// WHY: serde accepts them, but the workflow cannot run with them
#[test]
fn given_invalid_values_when_validating_then_rejected() {
    // Given: Three broken configs
    let mut zero_window = Config::default();
    zero_window.workflow.double_press_ms = 0;

    let mut zero_timeout = Config::default();
    zero_timeout.workflow.translation_timeout_secs = 0;

    let mut empty_hotkey = Config::default();
    empty_hotkey.hotkeys.swap = "  ".to_string();

    // When/Then: Each is rejected
    assert!(zero_window.validate().is_err());
    assert!(zero_timeout.validate().is_err());
    assert!(matches!(
        empty_hotkey.validate(),
        Err(AppError::ConfigError { reason, .. }) if reason.contains("hotkeys.swap")
    ));
}

/// WHAT: set_pair reports whether the stored pair changed
/// WHY: Unchanged snapshots must not rewrite the file
#[test]
fn given_languages_when_setting_same_or_new_pair_then_reports_change() {
    // Given: CS → EN-US
    let mut languages = LanguagesConfig::default();

    // When/Then: Same pair is not a change, swapped pair is
    assert!(!languages.set_pair(&LanguagePair::new("CS", "EN-US")));
    assert!(languages.set_pair(&LanguagePair::new("EN-US", "CS")));
    assert_eq!(languages.source, "EN-US");
    assert_eq!(languages.target, "CS");
}
