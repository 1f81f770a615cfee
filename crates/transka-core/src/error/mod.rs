use crate::HotkeyAction;

use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Workflow core errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The translator has no usable backend configuration.
    #[error("Translator is not configured {location}")]
    TranslatorNotConfigured {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The backend rejected the credentials.
    #[error("Translator rejected the credentials: {reason} {location}")]
    Authorization {
        /// Description from the backend.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The backend refused the request because a usage quota is exhausted.
    #[error("Translation quota exceeded {location}")]
    QuotaExceeded {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The backend could not be reached.
    #[error("Network error: {reason} {location}")]
    Network {
        /// Description of the transport failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The backend answered with something that is not a translation.
    #[error("Malformed translator response: {reason} {location}")]
    MalformedResponse {
        /// What was wrong with the response.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Any other failure reported by the translator backend.
    #[error("Translator error: {reason} {location}")]
    Backend {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The translator did not answer within the configured timeout.
    #[error("Translation timed out after {after:?} {location}")]
    Timeout {
        /// How long the request was allowed to run.
        after: Duration,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The blocking worker running the translator panicked or was cancelled.
    #[error("Translation worker failed: {reason} {location}")]
    WorkerFailed {
        /// Join error description.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A hotkey combination string could not be parsed.
    #[error("Invalid hotkey '{spec}': {reason} {location}")]
    InvalidHotkey {
        /// The combination as written in the settings.
        spec: String,
        /// Parser message.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The platform refused to register or unregister a hotkey.
    #[error("Hotkey registration failed for {action}: {reason} {location}")]
    HotkeyRegistration {
        /// Action whose binding failed.
        action: HotkeyAction,
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The UI execution context is gone (its receiver was dropped).
    #[error("UI context closed: {message} {location}")]
    UiContextClosed {
        /// What was being posted.
        message: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Message suitable for the status line and notifications.
    ///
    /// Same text as `Display` minus the source location.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::TranslatorNotConfigured { .. } => {
                "Translator is not configured. Check the settings.".to_string()
            }
            CoreError::Authorization { reason, .. } => {
                format!("Invalid credentials: {reason}")
            }
            CoreError::QuotaExceeded { .. } => "Translation quota exceeded".to_string(),
            CoreError::Network { reason, .. } => format!("Network error: {reason}"),
            CoreError::MalformedResponse { reason, .. } => {
                format!("Unexpected response: {reason}")
            }
            CoreError::Backend { reason, .. } => reason.clone(),
            CoreError::Timeout { after, .. } => {
                format!("Translation timed out after {after:?}")
            }
            CoreError::WorkerFailed { reason, .. } => {
                format!("Translation worker failed: {reason}")
            }
            CoreError::InvalidHotkey { spec, reason, .. } => {
                format!("Invalid hotkey '{spec}': {reason}")
            }
            CoreError::HotkeyRegistration { action, reason, .. } => {
                format!("Could not register the {action} hotkey: {reason}")
            }
            CoreError::UiContextClosed { message, .. } => message.clone(),
        }
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
