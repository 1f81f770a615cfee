//! Double-press detection for global hotkeys.
//!
//! Global hotkeys are easy to hit by accident, so an action only fires when
//! its combination is pressed twice within a short window. Presses arrive on
//! the hotkey listener thread; each action has its own lock so a burst on one
//! combination never delays another.

use crate::HotkeyAction;

use std::{
    collections::HashMap,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use tracing::trace;

/// Default time window between the two presses of a double-press.
pub const DEFAULT_DOUBLE_PRESS_THRESHOLD: Duration = Duration::from_millis(500);

/// Turns single presses into confirmed double-press events.
///
/// A press either opens a window for its action or, if one is already open
/// and younger than the threshold, confirms the double-press and closes the
/// window. Three rapid presses therefore yield exactly one confirmation; the
/// third press opens a fresh window.
pub struct DoublePressDebouncer {
    threshold_nanos: AtomicU64,
    // Built once in `new` for every action and never resized, so lookups
    // need no outer lock.
    pending: HashMap<HotkeyAction, Mutex<Option<Instant>>>,
}

impl DoublePressDebouncer {
    /// Creates a debouncer with the given double-press window.
    pub fn new(threshold: Duration) -> Self {
        let pending = HotkeyAction::ALL
            .iter()
            .map(|action| (*action, Mutex::new(None)))
            .collect();

        Self {
            threshold_nanos: AtomicU64::new(duration_to_nanos(threshold)),
            pending,
        }
    }

    /// Current double-press window.
    pub fn threshold(&self) -> Duration {
        Duration::from_nanos(self.threshold_nanos.load(Ordering::Relaxed))
    }

    /// Replaces the double-press window. Open windows are judged against the
    /// new value from the next press on.
    pub fn set_threshold(&self, threshold: Duration) {
        self.threshold_nanos
            .store(duration_to_nanos(threshold), Ordering::Relaxed);
    }

    /// Records a press of `action` at `now`.
    ///
    /// Returns `true` when this press completes a double-press.
    pub fn on_press(&self, action: HotkeyAction, now: Instant) -> bool {
        let Some(slot) = self.pending.get(&action) else {
            return false;
        };
        let threshold = self.threshold();
        let mut pending = slot.lock().unwrap_or_else(PoisonError::into_inner);

        match *pending {
            Some(first) if now.saturating_duration_since(first) < threshold => {
                *pending = None;
                trace!(action = %action, "Double-press confirmed");
                true
            }
            _ => {
                *pending = Some(now);
                trace!(action = %action, "Double-press window opened");
                false
            }
        }
    }

    /// Forgets any half-finished double-press of `action`.
    pub fn reset(&self, action: HotkeyAction) {
        if let Some(slot) = self.pending.get(&action) {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        }
    }
}

impl Default for DoublePressDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_PRESS_THRESHOLD)
    }
}

fn duration_to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
