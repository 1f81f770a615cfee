//! Presentation surface without a window.
//!
//! "Showing" captures the clipboard as input; status and output are
//! surfaced through the tray tooltip and desktop notifications.

use crate::{TrayCommand, config::BehaviourConfig, tray_manager::truncate_tooltip};

use arboard::Clipboard;
use notify_rust::Notification;
use tao::event_loop::EventLoopProxy;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use transka_core::{LanguagePair, PresentationSurface, Severity};

const APP_NAME: &str = "Transka";

/// Tray-backed [`PresentationSurface`].
pub struct TraySurface {
    input: String,
    output: String,
    status: Option<(String, Severity)>,
    languages: LanguagePair,
    visible: bool,
    clipboard: Option<Clipboard>,
    tray_proxy: EventLoopProxy<TrayCommand>,
    behaviour: watch::Receiver<BehaviourConfig>,
}

impl TraySurface {
    /// Create a hidden surface.
    ///
    /// Without clipboard access the surface still works, but input can only
    /// be empty.
    pub fn new(
        languages: LanguagePair,
        tray_proxy: EventLoopProxy<TrayCommand>,
        behaviour: watch::Receiver<BehaviourConfig>,
    ) -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                warn!(error = %e, "Clipboard unavailable, input capture disabled");
                None
            }
        };

        Self {
            input: String::new(),
            output: String::new(),
            status: None,
            languages,
            visible: false,
            clipboard,
            tray_proxy,
            behaviour,
        }
    }

    fn capture_clipboard(&mut self) {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        match clipboard.get_text() {
            Ok(text) if !text.trim().is_empty() => {
                debug!(text_len = text.len(), "Input captured from clipboard");
                self.input = text;
            }
            Ok(_) => debug!("Clipboard empty, input kept"),
            Err(e) => debug!(error = %e, "Clipboard holds no text, input kept"),
        }
    }

    fn refresh_tooltip(&self) {
        let status = match (&self.status, self.visible) {
            (Some((text, _)), true) => Some(text.as_str()),
            _ => None,
        };
        let tooltip = compose_tooltip(&self.languages, status);
        if self
            .tray_proxy
            .send_event(TrayCommand::SetTooltip(tooltip))
            .is_err()
        {
            debug!("Event loop closed, tooltip not updated");
        }
    }

    fn notifications_enabled(&self) -> bool {
        self.behaviour.borrow().notifications
    }
}

impl PresentationSurface for TraySurface {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_output_text(&mut self, text: &str) {
        self.output = text.to_string();
        if self.visible && !text.trim().is_empty() && self.notifications_enabled() {
            show_notification(format!("{APP_NAME} ({})", self.languages), text.to_string());
        }
    }

    fn output_text(&self) -> String {
        self.output.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn clear_output(&mut self) {
        self.output.clear();
    }

    fn set_status(&mut self, text: &str, severity: Severity) {
        debug!(status = text, ?severity, "Status updated");
        self.status = Some((text.to_string(), severity));
        self.refresh_tooltip();
    }

    fn show(&mut self) {
        self.capture_clipboard();
        self.visible = true;
        self.status = Some(("Ready".to_string(), Severity::Info));
        self.refresh_tooltip();
        info!(input_len = self.input.len(), "Surface shown");
    }

    fn hide(&mut self) {
        self.visible = false;
        self.status = None;
        self.refresh_tooltip();
    }

    fn focus_input(&mut self) {
        debug!("No input widget to focus");
    }

    fn notify(&mut self, title: &str, message: &str) {
        if self.notifications_enabled() {
            show_notification(title.to_string(), message.to_string());
        } else {
            info!(title, message, "Notification suppressed by settings");
        }
    }

    fn set_languages(&mut self, languages: &LanguagePair) {
        self.languages = languages.clone();
        self.refresh_tooltip();
    }
}

/// Tooltip text: the language pair, plus the status while shown.
pub(crate) fn compose_tooltip(languages: &LanguagePair, status: Option<&str>) -> String {
    let tooltip = match status {
        Some(status) => format!("{APP_NAME} ({languages}): {status}"),
        None => format!("{APP_NAME} ({languages})"),
    };
    truncate_tooltip(&tooltip)
}

/// Raise a desktop notification off the UI context.
fn show_notification(summary: String, body: String) {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = Notification::new()
            .appname(APP_NAME)
            .summary(&summary)
            .body(&body)
            .show()
        {
            warn!(error = %e, "Failed to show notification");
        }
    });
}
