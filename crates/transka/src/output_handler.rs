//! Clipboard output and auto-paste.
//!
//! The workflow's clipboard sink. Copies the finished translation and, when
//! enabled, pastes it into the window that regains focus as the cycle closes.

use crate::{AppError, AppResult, PasteShortcut, config::BehaviourConfig};

use std::panic::Location;
use std::time::Duration;

use arboard::Clipboard;
use error_location::ErrorLocation;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};
use transka_core::ClipboardSink;

/// Delay between the clipboard write and the paste keystroke.
///
/// Covers both the clipboard manager picking up the write and the previous
/// window regaining focus after the cycle closes.
const CLIPBOARD_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Output handler for clipboard and auto-paste operations.
pub struct OutputHandler {
    pub(crate) clipboard: Clipboard,
    behaviour: watch::Receiver<BehaviourConfig>,
}

impl OutputHandler {
    /// Create a new output handler reading `auto_paste` from `behaviour`.
    #[track_caller]
    #[instrument(skip(behaviour))]
    pub fn new(behaviour: watch::Receiver<BehaviourConfig>) -> AppResult<Self> {
        let clipboard = Clipboard::new().map_err(|e| AppError::ClipboardError {
            reason: format!("Failed to initialize clipboard: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("OutputHandler initialized");

        Ok(Self {
            clipboard,
            behaviour,
        })
    }

    /// Put `text` on the clipboard.
    #[track_caller]
    pub fn copy_text(&mut self, text: &str) -> AppResult<()> {
        self.clipboard
            .set_text(text)
            .map_err(|e| AppError::ClipboardError {
                reason: format!("Failed to set clipboard: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(text_len = text.len(), "Text copied to clipboard");
        Ok(())
    }

    /// Simulate the platform paste shortcut.
    ///
    /// Enigo is not `Send`, so a fresh instance is created on the blocking
    /// pool for every paste.
    #[instrument]
    pub async fn paste() -> AppResult<()> {
        let paste_result = tokio::task::spawn_blocking(|| PasteShortcut::platform().send())
            .await
            .map_err(|e| AppError::AutoPasteFailed {
                reason: format!("Paste task panicked: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        paste_result?;

        debug!("Auto-paste simulated");

        Ok(())
    }
}

impl ClipboardSink for OutputHandler {
    fn copy(&mut self, text: &str) {
        if let Err(e) = self.copy_text(text) {
            error!(error = ?e, "Failed to copy translation");
            return;
        }

        let auto_paste = self.behaviour.borrow().auto_paste;
        if auto_paste {
            // Detached so the workflow can restore focus before the
            // keystroke lands.
            tokio::spawn(async {
                tokio::time::sleep(CLIPBOARD_SETTLE_DELAY).await;
                if let Err(e) = Self::paste().await {
                    warn!(error = ?e, "Auto-paste failed, but text is in clipboard");
                }
            });
        }

        info!(text_len = text.len(), auto_paste, "Translation output complete");
    }
}
