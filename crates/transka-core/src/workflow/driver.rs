use crate::{
    ClipboardSink, CoreResult, FocusProvider, PresentationSurface, TranslationDispatcher,
    Workflow, WorkflowCommand,
};

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// The workflow's serial execution context.
///
/// Owns the one [`Workflow`] instance and applies commands strictly in
/// arrival order, so transitions never overlap. Translations started by a
/// command are handed to the dispatcher and come back later as
/// [`WorkflowCommand::TranslationFinished`].
pub struct WorkflowDriver<S, C, F> {
    workflow: Workflow<S, C, F>,
    dispatcher: TranslationDispatcher,
    commands: mpsc::UnboundedReceiver<WorkflowCommand>,
}

impl<S, C, F> WorkflowDriver<S, C, F>
where
    S: PresentationSurface,
    C: ClipboardSink,
    F: FocusProvider,
{
    /// Creates a driver consuming `commands`.
    pub fn new(
        workflow: Workflow<S, C, F>,
        dispatcher: TranslationDispatcher,
        commands: mpsc::UnboundedReceiver<WorkflowCommand>,
    ) -> Self {
        Self {
            workflow,
            dispatcher,
            commands,
        }
    }

    /// The workflow being driven.
    pub fn workflow(&self) -> &Workflow<S, C, F> {
        &self.workflow
    }

    /// Processes commands until `Shutdown` or until every sender is gone.
    ///
    /// Returns the workflow so callers can inspect its final state.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> CoreResult<Workflow<S, C, F>> {
        info!(timeout_ms = self.dispatcher.timeout().as_millis(), "Workflow driver started");

        while let Some(command) = self.commands.recv().await {
            if !self.apply(command) {
                info!("Workflow driver shutting down");
                break;
            }
        }

        debug!(state = ?self.workflow.state(), "Workflow driver stopped");
        Ok(self.workflow)
    }

    /// Applies one command. Returns `false` when the loop should stop.
    fn apply(&mut self, command: WorkflowCommand) -> bool {
        let pending = match command {
            WorkflowCommand::Action(action) => self.workflow.handle_action(action),
            WorkflowCommand::Translate => self.workflow.request_translation(),
            WorkflowCommand::TranslationFinished { sequence, result } => {
                self.workflow.finish_translation(sequence, result);
                None
            }
            WorkflowCommand::Hide => {
                self.workflow.hide();
                None
            }
            WorkflowCommand::SetLanguages(languages) => {
                self.workflow.set_languages(languages);
                None
            }
            WorkflowCommand::Shutdown => return false,
        };

        if let Some(pending) = pending {
            // Detached: the result comes back through the command channel.
            drop(self.dispatcher.dispatch(pending));
        }
        true
    }
}
