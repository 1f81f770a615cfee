//! Configuration management for transka.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, serde defaults for missing fields, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{BehaviourConfig, HotkeysConfig, LanguagesConfig, TranslatorConfig, WorkflowConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Translation direction.
    #[serde(default)]
    pub languages: LanguagesConfig,
    /// Global hotkey combinations.
    #[serde(default)]
    pub hotkeys: HotkeysConfig,
    /// Double-press and timeout settings.
    #[serde(default)]
    pub workflow: WorkflowConfig,
    /// Application behavior settings.
    #[serde(default)]
    pub behavior: BehaviourConfig,
    /// External translation command.
    #[serde(default)]
    pub translator: TranslatorConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            Self::create_default(&config_path)
        }
    }

    /// Load configuration from `path`.
    ///
    /// Sections and fields missing from the file take their default values.
    #[track_caller]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Check values serde cannot reject on its own.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let problem = if self.workflow.double_press_ms == 0 {
            Some("workflow.double_press_ms must be greater than zero".to_string())
        } else if self.workflow.translation_timeout_secs == 0 {
            Some("workflow.translation_timeout_secs must be greater than zero".to_string())
        } else if self.languages.target.trim().is_empty() {
            Some("languages.target must not be empty".to_string())
        } else {
            self.hotkeys
                .bindings()
                .into_iter()
                .find(|(_, spec)| spec.trim().is_empty())
                .map(|(action, _)| format!("hotkeys.{action} must not be empty"))
        };

        match problem {
            Some(reason) => Err(AppError::ConfigError {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    /// Save configuration to `path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Location of `config.toml`, creating its directory if needed.
    #[track_caller]
    pub fn path() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Directory for log files, creating it if needed.
    #[track_caller]
    pub fn logs_dir() -> AppResult<PathBuf> {
        let logs_dir = Self::project_dirs()?.data_dir().join("logs");
        fs::create_dir_all(&logs_dir)?;
        Ok(logs_dir)
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "transka", "Transka").ok_or_else(|| AppError::ConfigError {
            reason: "Failed to get project directories".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn create_default(path: &Path) -> AppResult<Self> {
        let config = Config::default();
        config.save_to(path)?;

        warn!(
            config_path = ?path,
            "Default config created. Set translator.command before translating."
        );

        Ok(config)
    }
}
