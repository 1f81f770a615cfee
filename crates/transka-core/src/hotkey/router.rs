use crate::{ActionLookup, DoublePressDebouncer, HotkeyAction, UiHandle, WorkflowCommand};

use std::{collections::HashSet, sync::Arc, time::Instant};

use tracing::{debug, trace, warn};

/// Entry point for raw hotkey notifications on the listener thread.
///
/// Resolves the platform id to an action, applies double-press detection
/// where required, and posts confirmed actions to the UI context. Never
/// blocks.
#[derive(Clone)]
pub struct PressRouter {
    lookup: ActionLookup,
    debouncer: Arc<DoublePressDebouncer>,
    double_press: HashSet<HotkeyAction>,
    ui: UiHandle,
}

impl PressRouter {
    /// Creates a router. Actions in `double_press` only fire on a
    /// double-press; the rest fire on every press.
    pub fn new(
        lookup: ActionLookup,
        debouncer: Arc<DoublePressDebouncer>,
        double_press: impl IntoIterator<Item = HotkeyAction>,
        ui: UiHandle,
    ) -> Self {
        Self {
            lookup,
            debouncer,
            double_press: double_press.into_iter().collect(),
            ui,
        }
    }

    /// The debouncer shared with settings reloads.
    pub fn debouncer(&self) -> &Arc<DoublePressDebouncer> {
        &self.debouncer
    }

    /// Handles one "pressed" notification for hotkey `id` at `now`.
    ///
    /// Returns the action posted to the UI context, if any.
    pub fn on_press(&self, id: u32, now: Instant) -> Option<HotkeyAction> {
        let Some(action) = self.lookup.resolve(id) else {
            trace!(id, "Press for unknown hotkey id");
            return None;
        };

        if self.double_press.contains(&action) && !self.debouncer.on_press(action, now) {
            return None;
        }

        match self.ui.post(WorkflowCommand::Action(action)) {
            Ok(()) => {
                debug!(action = %action, "Hotkey action confirmed");
                Some(action)
            }
            Err(e) => {
                warn!(action = %action, error = ?e, "UI context closed, press dropped");
                None
            }
        }
    }
}
