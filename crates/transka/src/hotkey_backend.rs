//! `global-hotkey` implementation of the core hotkey backend.

use crate::{AppError, AppResult};

use std::{panic::Location, str::FromStr};

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyManager, hotkey::HotKey};
use tracing::{debug, instrument};
use transka_core::{CoreError, CoreResult, HotkeyAction, HotkeyBackend};

/// Registers process-wide hotkeys through [`GlobalHotKeyManager`].
///
/// Must be created and used on a thread with a message pump (the main thread
/// running the `tao` event loop) so that `WM_HOTKEY` messages are dispatched
/// on Windows. Dropping it releases every hotkey it registered.
pub struct GlobalHotkeyBackend {
    manager: GlobalHotKeyManager,
}

impl GlobalHotkeyBackend {
    /// Create the platform hotkey manager.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { manager })
    }
}

impl HotkeyBackend for GlobalHotkeyBackend {
    type Binding = HotKey;

    fn parse(&self, spec: &str) -> CoreResult<HotKey> {
        parse_hotkey(spec)
    }

    fn binding_id(&self, binding: &HotKey) -> u32 {
        binding.id()
    }

    #[track_caller]
    fn register(&self, action: HotkeyAction, binding: &HotKey) -> CoreResult<()> {
        self.manager
            .register(*binding)
            .map_err(|e| CoreError::HotkeyRegistration {
                action,
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(action = %action, id = binding.id(), "Hotkey registered with platform");
        Ok(())
    }

    #[track_caller]
    fn unregister(&self, action: HotkeyAction, binding: &HotKey) -> CoreResult<()> {
        self.manager
            .unregister(*binding)
            .map_err(|e| CoreError::HotkeyRegistration {
                action,
                reason: format!("Failed to unregister: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Parse a combination such as `"ctrl+alt+t"` (case-insensitive).
#[track_caller]
pub(crate) fn parse_hotkey(spec: &str) -> CoreResult<HotKey> {
    HotKey::from_str(spec.trim()).map_err(|e| CoreError::InvalidHotkey {
        spec: spec.to_string(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
