use crate::{
    AppError, AppResult, TrayCommand, TrayIconState,
    config::{BehaviourConfig, Config, TranslatorConfig},
    tray_manager::TrayMenuIds,
};

use std::{panic::Location, path::PathBuf, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tokio::sync::{mpsc, watch};
use tracing::{error, info, instrument, warn};
use tray_icon::menu::MenuEvent;
use transka_core::{
    DoublePressDebouncer, HotkeyAction, UiHandle, WorkflowCommand, WorkflowSnapshot,
    WorkflowState,
};

/// Tray menu handling, snapshot mirroring and settings management.
///
/// Runs on the async runtime thread. Tray icon and hotkey changes go back to
/// the main thread through `tray_proxy` because `TrayIcon` is `!Send` and
/// hotkeys must be registered where the OS messages are pumped.
pub struct App {
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) config: Config,
    pub(crate) config_path: PathBuf,
    pub(crate) ui: UiHandle,
    pub(crate) snapshots: watch::Receiver<WorkflowSnapshot>,
    pub(crate) debouncer: Arc<DoublePressDebouncer>,
    pub(crate) behaviour_tx: watch::Sender<BehaviourConfig>,
    pub(crate) translator_tx: watch::Sender<TranslatorConfig>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
    pub(crate) menu_ids: TrayMenuIds,
}

impl App {
    /// Run the application event loop until Exit or until the workflow stops.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!(languages = %self.config.languages.pair(), "Transka starting");

        // MenuEvent::receiver() is a crossbeam receiver with a blocking
        // recv(), forwarded by one persistent blocking task. When
        // tray_event_rx is dropped the next blocking_send() fails and the
        // task exits.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let mut tray_state = TrayIconState::Hidden;

        loop {
            tokio::select! {
                Some(event) = tray_event_rx.recv() => {
                    match self.handle_tray_event(event) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => error!(error = ?e, "Failed to handle tray event"),
                    }
                }

                changed = self.snapshots.changed() => {
                    if changed.is_err() {
                        info!("Workflow stopped, shutting down");
                        break;
                    }
                    let snapshot = self.snapshots.borrow_and_update().clone();
                    tray_state = self.on_snapshot(&snapshot, tray_state);
                }
            }
        }

        drop(tray_event_rx);

        match tokio::time::timeout(Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.ui.post(WorkflowCommand::Shutdown) {
            warn!(error = ?e, "Workflow already stopped");
        }
        let _ = self.tray_proxy.send_event(TrayCommand::Shutdown);

        info!("Transka shut down successfully");

        Ok(())
    }

    /// Mirror a workflow snapshot onto the tray icon and persist language
    /// changes. Returns the tray state now shown.
    fn on_snapshot(&mut self, snapshot: &WorkflowSnapshot, shown: TrayIconState) -> TrayIconState {
        let next = TrayIconState::from_snapshot(snapshot);
        if next != shown && self.send_tray(TrayCommand::SetState(next)).is_err() {
            return shown;
        }

        if self.config.languages.set_pair(&snapshot.languages) {
            match self.config.save_to(&self.config_path) {
                Ok(()) => info!(languages = %snapshot.languages, "Languages saved"),
                Err(e) => error!(error = ?e, "Failed to save languages"),
            }
        }

        next
    }

    /// Handle one tray menu click. Returns `true` when the app should exit.
    #[instrument(skip(self))]
    fn handle_tray_event(&mut self, event: MenuEvent) -> AppResult<bool> {
        let event_id = &event.id;

        if *event_id == self.menu_ids.show {
            // Revealing is what the main action does from Hidden.
            if self.snapshots.borrow().state == WorkflowState::Hidden {
                self.ui.post(WorkflowCommand::Action(HotkeyAction::Main))?;
            }
        } else if *event_id == self.menu_ids.hide {
            self.ui.post(WorkflowCommand::Hide)?;
        } else if *event_id == self.menu_ids.translate {
            self.ui.post(WorkflowCommand::Translate)?;
        } else if *event_id == self.menu_ids.settings {
            open::that(&self.config_path)?;
            info!(config_path = ?self.config_path, "Opened settings file");
        } else if *event_id == self.menu_ids.reload {
            self.reload_settings()?;
        } else if *event_id == self.menu_ids.exit {
            info!("Exit requested from tray menu");
            return Ok(true);
        }

        Ok(false)
    }

    /// Re-read the settings file and apply it without restarting.
    ///
    /// An invalid file is rejected as a whole; the running settings stay.
    #[instrument(skip(self))]
    fn reload_settings(&mut self) -> AppResult<()> {
        let fresh = Config::load_from(&self.config_path)?;
        fresh.validate()?;

        let previous = std::mem::replace(&mut self.config, fresh.clone());

        if previous.languages.pair() != fresh.languages.pair() {
            self.ui
                .post(WorkflowCommand::SetLanguages(fresh.languages.pair()))?;
        }

        self.debouncer
            .set_threshold(fresh.workflow.double_press_threshold());
        let _ = self.behaviour_tx.send_replace(fresh.behavior.clone());
        let _ = self.translator_tx.send_replace(fresh.translator.clone());

        if previous.hotkeys != fresh.hotkeys {
            self.send_tray(TrayCommand::Rebind(fresh.hotkeys.clone()))?;
        }

        if previous.workflow.translation_timeout_secs != fresh.workflow.translation_timeout_secs
            || previous.workflow.double_press_actions != fresh.workflow.double_press_actions
        {
            warn!("Timeout and double-press action changes apply after restart");
        }

        info!(
            double_press_ms = fresh.workflow.double_press_ms,
            translator_configured = fresh.translator.is_configured(),
            "Settings reloaded"
        );

        Ok(())
    }

    #[track_caller]
    fn send_tray(&self, command: TrayCommand) -> AppResult<()> {
        self.tray_proxy
            .send_event(command)
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Event loop closed: {:?}", e.0),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
