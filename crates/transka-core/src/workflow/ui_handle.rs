use crate::{CoreError, CoreResult, WorkflowCommand};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::mpsc;

/// Posts commands onto the workflow's serial execution context.
///
/// Cheap to clone and `Send`. Posting never blocks, so it is safe from the
/// hotkey listener thread and from translation workers alike.
#[derive(Debug, Clone)]
pub struct UiHandle {
    tx: mpsc::UnboundedSender<WorkflowCommand>,
}

impl UiHandle {
    /// Creates a handle and the receiver the driver consumes.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<WorkflowCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queues `command` for the UI context.
    #[track_caller]
    pub fn post(&self, command: WorkflowCommand) -> CoreResult<()> {
        self.tx
            .send(command)
            .map_err(|e| CoreError::UiContextClosed {
                message: format!("Failed to post {:?}", e.0),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Whether the driver has gone away.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
