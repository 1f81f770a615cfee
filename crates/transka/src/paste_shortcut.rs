//! The platform paste shortcut as synthetic key events.

use crate::{AppError, AppResult};

use std::{panic::Location, time::Duration};

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use error_location::ErrorLocation;

/// Gap some applications need between key events.
const KEY_EVENT_DELAY: Duration = Duration::from_millis(10);

/// A modifier chord: hold `modifier`, click `key`, release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PasteShortcut {
    pub(crate) modifier: Key,
    pub(crate) key: char,
}

impl PasteShortcut {
    /// Cmd+V on macOS, Ctrl+V elsewhere.
    pub(crate) fn platform() -> Self {
        #[cfg(target_os = "macos")]
        let modifier = Key::Meta;
        #[cfg(not(target_os = "macos"))]
        let modifier = Key::Control;

        Self { modifier, key: 'v' }
    }

    /// Send the chord to whichever window has focus.
    ///
    /// Blocks for the key event delays; call it off the async threads.
    #[track_caller]
    pub(crate) fn send(&self) -> AppResult<()> {
        let mut enigo =
            Enigo::new(&Settings::default()).map_err(|e| AppError::AutoPasteFailed {
                reason: format!("Failed to create Enigo: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut held = HeldModifier::press(&mut enigo, self.modifier)?;
        std::thread::sleep(KEY_EVENT_DELAY);
        held.click(self.key)?;
        std::thread::sleep(KEY_EVENT_DELAY);

        Ok(())
    }
}

/// Keeps the modifier down until dropped, so an error halfway through the
/// chord never leaves it stuck.
struct HeldModifier<'a> {
    enigo: &'a mut Enigo,
    modifier: Key,
}

impl<'a> HeldModifier<'a> {
    #[track_caller]
    fn press(enigo: &'a mut Enigo, modifier: Key) -> AppResult<Self> {
        enigo
            .key(modifier, Direction::Press)
            .map_err(|e| AppError::AutoPasteFailed {
                reason: format!("Failed to press {:?}: {}", modifier, e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        Ok(Self { enigo, modifier })
    }

    #[track_caller]
    fn click(&mut self, key: char) -> AppResult<()> {
        self.enigo
            .key(Key::Unicode(key), Direction::Click)
            .map_err(|e| AppError::AutoPasteFailed {
                reason: format!("Failed to press {}: {}", key.to_ascii_uppercase(), e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl Drop for HeldModifier<'_> {
    fn drop(&mut self) {
        // Best effort; the OS resets modifiers on the next physical key event.
        let _ = self.enigo.key(self.modifier, Direction::Release);
    }
}
