//! Foreground window bookkeeping.

use tracing::debug;
use transka_core::{FocusProvider, FocusToken};

/// Remembers the foreground window on Windows; hands out empty tokens
/// elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformFocus;

impl FocusProvider for PlatformFocus {
    fn capture(&mut self) -> FocusToken {
        let token = platform::foreground_window();
        debug!(window = ?token.raw(), "Foreground window captured");
        token
    }

    fn restore(&mut self, token: &FocusToken) {
        let Some(raw) = token.raw() else {
            return;
        };
        // Fails quietly when the window has closed in the meantime.
        let restored = platform::set_foreground_window(raw);
        debug!(window = raw, restored, "Foreground window restored");
    }
}

#[cfg(target_os = "windows")]
mod platform {
    use transka_core::FocusToken;
    use windows::Win32::{
        Foundation::HWND,
        UI::WindowsAndMessaging::{GetForegroundWindow, SetForegroundWindow},
    };

    pub(super) fn foreground_window() -> FocusToken {
        let hwnd = unsafe { GetForegroundWindow() };
        FocusToken::from_raw(hwnd.0 as isize)
    }

    pub(super) fn set_foreground_window(raw: isize) -> bool {
        unsafe { SetForegroundWindow(HWND(raw as *mut core::ffi::c_void)) }.as_bool()
    }
}

#[cfg(not(target_os = "windows"))]
mod platform {
    use transka_core::FocusToken;

    pub(super) fn foreground_window() -> FocusToken {
        FocusToken::empty()
    }

    pub(super) fn set_foreground_window(_raw: isize) -> bool {
        false
    }
}
