//! Global hotkey listener.
//!
//! Forwards pressed events from the `global-hotkey` channel to the
//! [`PressRouter`], which applies double-press detection and posts confirmed
//! actions to the workflow.

use crate::AppResult;

use std::time::{Duration, Instant};

use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, trace, warn};
use transka_core::PressRouter;

/// Listens for global hotkey presses until shutdown.
pub struct HotkeyHandler {
    router: PressRouter,
}

impl HotkeyHandler {
    /// Create a handler feeding `router`.
    ///
    /// This struct is `Send` and can live on any thread; it only listens on
    /// the global [`GlobalHotKeyEvent`] channel. Registration happens on the
    /// main thread through the hotkey registry.
    pub fn new(router: PressRouter) -> Self {
        Self { router }
    }

    /// Run the hotkey handler event loop.
    ///
    /// This method blocks until a shutdown signal is received.
    #[instrument(skip(self, shutdown_rx))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let receiver = GlobalHotKeyEvent::receiver().clone();
        let (event_tx, mut event_rx) = mpsc::channel(32);

        // GlobalHotKeyEvent::receiver() is a crossbeam receiver with a
        // blocking recv(), so one blocking task forwards events without
        // polling. Presses are timestamped here, before any queueing.
        //
        // Shutdown: when event_rx is dropped, the next blocking_send() fails
        // and the forwarder exits.
        let handle = tokio::task::spawn_blocking(move || {
            while let Ok(event) = receiver.recv() {
                if event_tx.blocking_send((event, Instant::now())).is_err() {
                    break;
                }
            }
        });

        info!("Hotkey handler started");

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Hotkey handler shutting down");
                    break;
                }
                Some((event, pressed_at)) = event_rx.recv() => {
                    if event.state == HotKeyState::Pressed {
                        self.router.on_press(event.id, pressed_at);
                    } else {
                        trace!(id = event.id, "Hotkey released");
                    }
                }
            }
        }

        drop(event_rx);

        // The forwarder may be parked in recv() until the next hotkey event;
        // the runtime reclaims it on exit.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Hotkey event forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Hotkey event forwarder task panicked"),
            Err(_) => debug!(
                "Hotkey event forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }
}
