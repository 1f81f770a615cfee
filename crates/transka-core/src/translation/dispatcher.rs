//! Runs translations off the UI context and posts the results back.

use crate::{
    CoreError, PendingTranslation, TranslationRequest, TranslationResult, Translator, UiHandle,
    WorkflowCommand,
};

use std::{panic::Location, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// How long a translation may take before it is reported as failed.
pub const DEFAULT_TRANSLATION_TIMEOUT: Duration = Duration::from_secs(15);

/// Hands translation requests to the blocking pool.
///
/// Workers never touch workflow state. They carry the sequence number they
/// were given back to the UI context, which decides whether the result still
/// matters.
#[derive(Clone)]
pub struct TranslationDispatcher {
    translator: Arc<dyn Translator>,
    ui: UiHandle,
    timeout: Duration,
}

impl TranslationDispatcher {
    /// Creates a dispatcher posting results through `ui`.
    pub fn new(translator: Arc<dyn Translator>, ui: UiHandle, timeout: Duration) -> Self {
        Self {
            translator,
            ui,
            timeout,
        }
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Starts `pending` in the background.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self, pending), fields(sequence = pending.sequence))]
    pub fn dispatch(&self, pending: PendingTranslation) -> JoinHandle<()> {
        let translator = Arc::clone(&self.translator);
        let ui = self.ui.clone();
        let timeout = self.timeout;

        tokio::spawn(async move {
            let sequence = pending.sequence;
            let result = Self::invoke(translator, pending.request, timeout).await;

            if let Err(e) = ui.post(WorkflowCommand::TranslationFinished { sequence, result }) {
                // The UI context is shutting down; nobody is left to show it.
                debug!(sequence, error = ?e, "Dropping translation result");
            }
        })
    }

    /// Runs one request to completion, converting every failure into a
    /// displayable message.
    pub async fn invoke(
        translator: Arc<dyn Translator>,
        request: TranslationRequest,
        timeout: Duration,
    ) -> TranslationResult {
        if !translator.is_configured() {
            let e = CoreError::TranslatorNotConfigured {
                location: ErrorLocation::from(Location::caller()),
            };
            warn!(service = translator.service_name(), "Translator not configured");
            return Err(e.user_message());
        }

        let service = translator.service_name().to_string();
        let start = std::time::Instant::now();

        let worker = tokio::task::spawn_blocking(move || {
            translator.translate(
                &request.text,
                &request.languages.source,
                &request.languages.target,
            )
        });

        let outcome = match tokio::time::timeout(timeout, worker).await {
            Ok(Ok(Ok(text))) => Ok(text),
            Ok(Ok(Err(e))) => Err(e),
            Ok(Err(join_error)) => Err(CoreError::WorkerFailed {
                reason: join_error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            // The blocking call keeps running; its result is dropped.
            Err(_) => Err(CoreError::Timeout {
                after: timeout,
                location: ErrorLocation::from(Location::caller()),
            }),
        };

        let duration_ms = start.elapsed().as_millis();
        match outcome {
            Ok(text) => {
                info!(service = %service, duration_ms, text_len = text.len(), "Translator answered");
                Ok(text)
            }
            Err(e) => {
                warn!(service = %service, duration_ms, error = %e, "Translator failed");
                Err(e.user_message())
            }
        }
    }
}
