use transka_core::{WorkflowSnapshot, WorkflowState};

/// Tray icon states corresponding to the workflow cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Waiting for the main hotkey.
    Hidden,
    /// Input captured, waiting for the translate press.
    Shown,
    /// A translation request is in flight.
    Translating,
    /// Translation ready to be copied.
    Translated,
}

impl TrayIconState {
    /// Icon state for a workflow snapshot. A pending request wins over the
    /// cycle position.
    pub fn from_snapshot(snapshot: &WorkflowSnapshot) -> Self {
        if snapshot.translating {
            return TrayIconState::Translating;
        }
        match snapshot.state {
            WorkflowState::Hidden => TrayIconState::Hidden,
            WorkflowState::Shown => TrayIconState::Shown,
            WorkflowState::Translated => TrayIconState::Translated,
        }
    }

    /// Background color of the icon.
    pub fn tint(self) -> [u8; 3] {
        match self {
            TrayIconState::Hidden => [33, 150, 243],
            TrayIconState::Shown => [63, 81, 181],
            TrayIconState::Translating => [255, 160, 0],
            TrayIconState::Translated => [76, 175, 80],
        }
    }
}
