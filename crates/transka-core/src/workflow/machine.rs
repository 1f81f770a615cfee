//! The hotkey-driven translation cycle.
//!
//! `Hidden → Shown → Translated → Hidden`, advanced by confirmed presses of
//! the main hotkey. The machine itself is synchronous: it mutates the
//! surface directly and hands translation requests back to the caller, which
//! runs them in the background and feeds the result to
//! [`Workflow::finish_translation`].

use crate::{
    ClipboardSink, FocusProvider, FocusToken, HotkeyAction, LanguagePair, PendingTranslation,
    PresentationSurface, Severity, TranslationOrigin, TranslationRequest, TranslationResult,
    WorkflowSnapshot, WorkflowState,
};

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    sequence: u64,
    origin: TranslationOrigin,
}

/// Workflow state machine over its collaborators.
pub struct Workflow<S, C, F> {
    surface: S,
    clipboard: C,
    focus: F,
    state: WorkflowState,
    languages: LanguagePair,
    focus_token: FocusToken,
    last_sequence: u64,
    in_flight: Option<InFlight>,
    // Correlates log lines of one show/hide cycle.
    cycle_id: Option<Uuid>,
    snapshot_tx: watch::Sender<WorkflowSnapshot>,
}

impl<S, C, F> Workflow<S, C, F>
where
    S: PresentationSurface,
    C: ClipboardSink,
    F: FocusProvider,
{
    /// Creates a workflow in the `Hidden` state.
    pub fn new(surface: S, clipboard: C, focus: F, languages: LanguagePair) -> Self {
        let (snapshot_tx, _) = watch::channel(WorkflowSnapshot {
            state: WorkflowState::Hidden,
            translating: false,
            languages: languages.clone(),
        });

        Self {
            surface,
            clipboard,
            focus,
            state: WorkflowState::Hidden,
            languages,
            focus_token: FocusToken::empty(),
            last_sequence: 0,
            in_flight: None,
            cycle_id: None,
            snapshot_tx,
        }
    }

    /// Current cycle position.
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Language pair in effect.
    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }

    /// Whether a translation request is awaiting its result.
    pub fn is_translating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Read access to the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Read access to the clipboard sink.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Read access to the focus provider.
    pub fn focus(&self) -> &F {
        &self.focus
    }

    /// Receives a snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Applies a confirmed hotkey action.
    ///
    /// Returns the request to dispatch when the action starts a translation.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn handle_action(&mut self, action: HotkeyAction) -> Option<PendingTranslation> {
        match action {
            HotkeyAction::Main => self.advance(),
            HotkeyAction::Swap => {
                self.swap_languages();
                None
            }
            HotkeyAction::Clear => {
                self.surface.clear_input();
                debug!("Input cleared");
                None
            }
        }
    }

    /// Translates the current input without advancing the cycle.
    ///
    /// Supersedes a request already in flight: its result will be discarded.
    /// Ignored while the surface is hidden.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn request_translation(&mut self) -> Option<PendingTranslation> {
        if self.state == WorkflowState::Hidden {
            debug!("Surface hidden, ignoring translation request");
            return None;
        }
        if let Some(previous) = self.in_flight {
            debug!(
                sequence = previous.sequence,
                "Superseding in-flight translation"
            );
        }
        self.begin_translation(TranslationOrigin::Manual)
    }

    /// Consumes the result of a dispatched translation.
    ///
    /// Results whose sequence number is not the one in flight are stale
    /// (superseded, or the surface was hidden meanwhile) and are dropped.
    #[instrument(skip(self, result), fields(state = ?self.state, ok = result.is_ok()))]
    pub fn finish_translation(&mut self, sequence: u64, result: TranslationResult) {
        let in_flight = match self.in_flight {
            Some(in_flight) if in_flight.sequence == sequence => in_flight,
            _ => {
                debug!(
                    sequence,
                    latest = self.last_sequence,
                    "Discarding stale translation result"
                );
                return;
            }
        };
        self.in_flight = None;

        match result {
            Ok(text) => {
                self.surface.set_output_text(&text);
                self.surface.set_status("Translated", Severity::Success);

                if in_flight.origin == TranslationOrigin::Hotkey
                    && self.state == WorkflowState::Shown
                {
                    self.set_state(WorkflowState::Translated);
                } else {
                    self.publish();
                }

                info!(
                    sequence,
                    cycle_id = ?self.cycle_id,
                    text_len = text.len(),
                    "Translation complete"
                );
            }
            Err(message) => {
                // Input stays untouched and state stays at Shown, so the
                // next main press retries instead of copying the error.
                self.surface
                    .set_status(&format!("Error: {message}"), Severity::Error);
                self.surface.notify("Translation failed", &message);
                self.publish();

                warn!(sequence, cycle_id = ?self.cycle_id, error = %message, "Translation failed");
            }
        }
    }

    /// Hides the surface and returns to `Hidden`.
    ///
    /// Every hide path goes through here, which keeps visibility and state
    /// in step. Focus goes back to the window that had it before the reveal.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn hide(&mut self) {
        if let Some(dropped) = self.in_flight.take() {
            debug!(
                sequence = dropped.sequence,
                "Dropping in-flight translation on hide"
            );
        }

        self.surface.hide();

        let token = std::mem::take(&mut self.focus_token);
        self.focus.restore(&token);

        if let Some(cycle_id) = self.cycle_id.take() {
            debug!(cycle_id = %cycle_id, "Cycle closed");
        }
        self.set_state(WorkflowState::Hidden);
    }

    /// Replaces the language pair.
    pub fn set_languages(&mut self, languages: LanguagePair) {
        if languages == self.languages {
            return;
        }
        self.languages = languages;
        self.surface.set_languages(&self.languages);
        info!(languages = %self.languages, "Languages updated");
        self.publish();
    }

    fn advance(&mut self) -> Option<PendingTranslation> {
        if let Some(in_flight) = self.in_flight {
            // Hotkey delivery can race a pending request; the result will
            // move the cycle on by itself.
            debug!(
                sequence = in_flight.sequence,
                "Translation pending, ignoring main press"
            );
            return None;
        }

        match self.state {
            WorkflowState::Hidden => {
                self.reveal();
                None
            }
            WorkflowState::Shown => {
                let output = self.surface.output_text();
                if output.trim().is_empty() {
                    self.begin_translation(TranslationOrigin::Hotkey)
                } else {
                    debug!("Output already translated, skipping translation");
                    self.complete_cycle(output);
                    None
                }
            }
            WorkflowState::Translated => {
                let output = self.surface.output_text();
                self.complete_cycle(output);
                None
            }
        }
    }

    fn reveal(&mut self) {
        self.focus_token = self.focus.capture();
        // A new cycle never inherits output, or the next press would copy it.
        self.surface.clear_output();
        self.surface.show();
        self.surface.focus_input();

        let cycle_id = Uuid::new_v4();
        self.cycle_id = Some(cycle_id);
        self.set_state(WorkflowState::Shown);

        info!(
            cycle_id = %cycle_id,
            has_focus_token = !self.focus_token.is_empty(),
            "Surface shown"
        );
    }

    fn complete_cycle(&mut self, output: String) {
        let output = output.trim();
        if output.is_empty() {
            debug!("Nothing to copy");
        } else {
            self.clipboard.copy(output);
            info!(cycle_id = ?self.cycle_id, text_len = output.len(), "Translation copied");
        }

        self.surface.clear_input();
        self.surface.clear_output();
        self.hide();
    }

    fn begin_translation(&mut self, origin: TranslationOrigin) -> Option<PendingTranslation> {
        let input = self.surface.input_text();
        let Some(request) = TranslationRequest::capture(&input, &self.languages) else {
            self.surface
                .set_status("Nothing to translate", Severity::Warning);
            debug!(?origin, "Empty input, translation skipped");
            return None;
        };

        self.last_sequence += 1;
        let sequence = self.last_sequence;
        self.in_flight = Some(InFlight { sequence, origin });

        self.surface.set_status("Translating...", Severity::Working);
        self.publish();

        info!(
            sequence,
            ?origin,
            cycle_id = ?self.cycle_id,
            languages = %request.languages,
            text_len = request.text.len(),
            "Translation requested"
        );

        Some(PendingTranslation {
            sequence,
            origin,
            request,
        })
    }

    fn swap_languages(&mut self) {
        match self.languages.swapped() {
            Some(swapped) => {
                self.languages = swapped;
                self.surface.set_languages(&self.languages);
                self.surface
                    .set_status(&self.languages.to_string(), Severity::Info);
                info!(languages = %self.languages, "Languages swapped");
                self.publish();
            }
            None => {
                self.surface.set_status(
                    "Automatic detection cannot be a target language",
                    Severity::Warning,
                );
                debug!(languages = %self.languages, "Swap refused");
            }
        }
    }

    fn set_state(&mut self, next: WorkflowState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "Workflow state changed");
        }
        self.state = next;
        self.publish();
    }

    fn publish(&self) {
        // send_replace never fails, even without subscribers.
        let _ = self.snapshot_tx.send_replace(WorkflowSnapshot {
            state: self.state,
            translating: self.in_flight.is_some(),
            languages: self.languages.clone(),
        });
    }
}
