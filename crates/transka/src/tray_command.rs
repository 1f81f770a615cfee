use crate::{TrayIconState, config::HotkeysConfig};

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`) and the
/// hotkey registry (hotkey messages are pumped by its event loop), so all tray
/// and registration changes plus process lifecycle events flow through this
/// enum.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// Update the tray icon to a new state.
    SetState(TrayIconState),
    /// Replace the tray tooltip.
    SetTooltip(String),
    /// Re-register global hotkeys with new combinations.
    Rebind(HotkeysConfig),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
