use crate::{
    LanguagePair, PendingTranslation, TranslationDispatcher, TranslationOrigin,
    TranslationRequest, UiHandle, WorkflowCommand,
    tests::fakes::{ScriptedTranslator, backend_error},
};

use std::{sync::Arc, time::Duration};

#[allow(clippy::unwrap_used)]
fn request(text: &str) -> TranslationRequest {
    TranslationRequest::capture(text, &LanguagePair::new("CS", "EN-US")).unwrap()
}

/// WHAT: A successful translation comes back as Ok
/// WHY: Happy path of the blocking worker
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_working_translator_when_invoked_then_returns_translation() {
    // Given: A translator answering "Hello"
    let translator = Arc::new(ScriptedTranslator::ok("Hello"));

    // When: Invoking it
    let result =
        TranslationDispatcher::invoke(translator.clone(), request("Ahoj"), Duration::from_secs(5))
            .await;

    // Then: Ok with the answer, one call
    assert_eq!(result, Ok("Hello".to_string()));
    assert_eq!(translator.call_count(), 1);
}

/// WHAT: Backend errors come back as their display message
/// WHY: The state machine only shows text, it never inspects error kinds
#[tokio::test]
async fn given_failing_translator_when_invoked_then_returns_message() {
    // Given: A translator failing with a backend error
    let translator = Arc::new(ScriptedTranslator::new(vec![Err(backend_error(
        "Service unavailable",
    ))]));

    // When: Invoking it
    let result =
        TranslationDispatcher::invoke(translator, request("Ahoj"), Duration::from_secs(5)).await;

    // Then: Err with the location-free message
    assert_eq!(result, Err("Service unavailable".to_string()));
}

/// WHAT: A slow translator turns into a timeout error
/// WHY: A hung backend must not leave the workflow waiting forever
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_slow_translator_when_timeout_elapses_then_returns_timeout_message() {
    // Given: A translator sleeping longer than the timeout
    let translator =
        Arc::new(ScriptedTranslator::ok("late").with_delay(Duration::from_millis(500)));

    // When: Invoking it with a 50 ms timeout
    let result =
        TranslationDispatcher::invoke(translator, request("Ahoj"), Duration::from_millis(50))
            .await;

    // Then: Err mentioning the timeout
    let message = result.unwrap_err();
    assert!(message.contains("timed out"), "got: {message}");
    assert!(message.contains("50ms"), "got: {message}");
}

/// WHAT: An unconfigured translator is never called
/// WHY: Missing credentials are reported before any work is done
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_unconfigured_translator_when_invoked_then_reports_without_calling() {
    // Given: An unconfigured translator
    let translator = Arc::new(ScriptedTranslator::unconfigured());

    // When: Invoking it
    let result =
        TranslationDispatcher::invoke(translator.clone(), request("Ahoj"), Duration::from_secs(5))
            .await;

    // Then: Err, and translate was never reached
    assert!(result.unwrap_err().contains("not configured"));
    assert_eq!(translator.call_count(), 0);
}

/// WHAT: Dispatch posts the result tagged with its sequence number
/// WHY: The UI context matches results to requests by sequence
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_pending_translation_when_dispatched_then_result_posted_to_ui() {
    // Given: A dispatcher posting into a fresh channel
    let (ui, mut commands) = UiHandle::channel();
    let dispatcher = TranslationDispatcher::new(
        Arc::new(ScriptedTranslator::ok("Hello")),
        ui,
        Duration::from_secs(5),
    );

    // When: Dispatching sequence 7
    dispatcher
        .dispatch(PendingTranslation {
            sequence: 7,
            origin: TranslationOrigin::Hotkey,
            request: request("Ahoj"),
        })
        .await
        .unwrap();

    // Then: TranslationFinished for sequence 7 is queued
    let command = commands.recv().await.unwrap();
    assert!(
        matches!(
            &command,
            WorkflowCommand::TranslationFinished { sequence: 7, result } if result.as_deref() == Ok("Hello")
        ),
        "unexpected command: {command:?}"
    );
}

/// WHAT: Dispatch survives a closed UI context
/// WHY: Shutdown can race an in-flight request
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_closed_ui_when_result_ready_then_worker_finishes_quietly() {
    // Given: A dispatcher whose receiver is already gone
    let (ui, commands) = UiHandle::channel();
    drop(commands);
    let dispatcher = TranslationDispatcher::new(
        Arc::new(ScriptedTranslator::ok("Hello")),
        ui.clone(),
        Duration::from_secs(5),
    );

    // When: Dispatching
    let outcome = dispatcher
        .dispatch(PendingTranslation {
            sequence: 1,
            origin: TranslationOrigin::Manual,
            request: request("Ahoj"),
        })
        .await;

    // Then: The task completes without panicking
    assert!(outcome.is_ok());
    assert!(ui.is_closed());
}
