use crate::{
    HotkeyAction, LanguagePair, Severity, TranslationDispatcher, UiHandle, WorkflowCommand,
    WorkflowDriver, WorkflowState,
    tests::fakes::{
        FakeClipboard, FakeFocus, FakeSurface, FakeWorkflow, ScriptedTranslator, backend_error,
        workflow_with_input,
    },
};

use std::{sync::Arc, time::Duration};

fn driver_for(
    workflow: FakeWorkflow,
    translator: ScriptedTranslator,
) -> (UiHandle, WorkflowDriver<FakeSurface, FakeClipboard, FakeFocus>) {
    let (ui, commands) = UiHandle::channel();
    let dispatcher =
        TranslationDispatcher::new(Arc::new(translator), ui.clone(), Duration::from_secs(5));
    (ui, WorkflowDriver::new(workflow, dispatcher, commands))
}

/// Polls `condition` until it holds or five seconds pass.
async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}

/// WHAT: Three posted main presses run the whole cycle through the driver
/// WHY: Results must be marshalled back onto the serial context
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_driver_when_main_posted_three_times_then_cycle_completes() {
    // Given: A running driver over "Ahoj"
    let (workflow, surface, clipboard, _focus) = workflow_with_input("Ahoj");
    let snapshots = workflow.subscribe();
    let (ui, driver) = driver_for(workflow, ScriptedTranslator::ok("Hello"));
    let handle = tokio::spawn(driver.run());

    // When: Show, then translate
    ui.post(WorkflowCommand::Action(HotkeyAction::Main)).unwrap();
    ui.post(WorkflowCommand::Action(HotkeyAction::Main)).unwrap();

    // Then: The translation lands and the cycle advances
    assert!(wait_until(|| snapshots.borrow().state == WorkflowState::Translated).await);
    assert_eq!(surface.output(), "Hello");

    // When: Third press, then shutdown
    ui.post(WorkflowCommand::Action(HotkeyAction::Main)).unwrap();
    ui.post(WorkflowCommand::Shutdown).unwrap();
    let workflow = handle.await.unwrap().unwrap();

    // Then: Copied and hidden
    assert_eq!(workflow.state(), WorkflowState::Hidden);
    assert_eq!(clipboard.contents().as_deref(), Some("Hello"));
    assert!(!surface.visible());
}

/// WHAT: After a failed translation the next press retries
/// WHY: Errors must not strand the cycle or copy the error text
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_failed_translation_when_main_pressed_again_then_retry_succeeds() {
    // Given: A translator that fails once, then answers
    let (workflow, surface, clipboard, _focus) = workflow_with_input("Ahoj");
    let snapshots = workflow.subscribe();
    let translator =
        ScriptedTranslator::new(vec![Err(backend_error("Service unavailable")), Ok("Hello".into())]);
    let (ui, driver) = driver_for(workflow, translator);
    let handle = tokio::spawn(driver.run());

    // When: Show and translate
    ui.post(WorkflowCommand::Action(HotkeyAction::Main)).unwrap();
    ui.post(WorkflowCommand::Action(HotkeyAction::Main)).unwrap();

    // Then: Error status, still Shown
    assert!(wait_until(|| matches!(surface.status(), Some((_, Severity::Error)))).await);
    assert_eq!(snapshots.borrow().state, WorkflowState::Shown);
    assert_eq!(surface.input(), "Ahoj");

    // When: Main again
    ui.post(WorkflowCommand::Action(HotkeyAction::Main)).unwrap();

    // Then: Retry succeeds
    assert!(wait_until(|| snapshots.borrow().state == WorkflowState::Translated).await);
    assert_eq!(surface.output(), "Hello");
    assert_eq!(clipboard.copy_count(), 0);

    ui.post(WorkflowCommand::Shutdown).unwrap();
    handle.await.unwrap().unwrap();
}

/// WHAT: A result for a superseded request never reaches the output
/// WHY: Only the most recent request may write the output region
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_superseded_request_when_its_result_is_posted_then_discarded() {
    // Given: Shown surface and two manual translations queued back to back
    let (workflow, surface, _clipboard, _focus) = workflow_with_input("Ahoj");
    let (ui, driver) = driver_for(workflow, ScriptedTranslator::new(Vec::new()));
    ui.post(WorkflowCommand::Action(HotkeyAction::Main)).unwrap();
    ui.post(WorkflowCommand::Translate).unwrap();
    ui.post(WorkflowCommand::Translate).unwrap();

    // When: A late answer for request 1 is posted after request 2 started
    ui.post(WorkflowCommand::TranslationFinished {
        sequence: 1,
        result: Ok("stale".to_string()),
    })
    .unwrap();
    let handle = tokio::spawn(driver.run());

    // Then: Only request 2's answer is shown
    assert!(wait_until(|| !surface.output().is_empty()).await);
    assert_eq!(surface.output(), "translated: Ahoj");

    ui.post(WorkflowCommand::Shutdown).unwrap();
    let workflow = handle.await.unwrap().unwrap();
    assert!(!workflow.is_translating());
    assert_eq!(workflow.state(), WorkflowState::Shown);
}

/// WHAT: Hide and language commands are applied in order
/// WHY: Tray menu entries reach the workflow through the same queue
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_hide_and_languages_commands_when_posted_then_applied() {
    // Given: A driver with a shown surface
    let (workflow, surface, _clipboard, focus) = workflow_with_input("Ahoj");
    let (ui, driver) = driver_for(workflow, ScriptedTranslator::new(Vec::new()));
    ui.post(WorkflowCommand::Action(HotkeyAction::Main)).unwrap();

    // When: Changing languages, hiding, shutting down
    ui.post(WorkflowCommand::SetLanguages(LanguagePair::new("DE", "FR")))
        .unwrap();
    ui.post(WorkflowCommand::Hide).unwrap();
    ui.post(WorkflowCommand::Shutdown).unwrap();
    let workflow = driver.run().await.unwrap();

    // Then: Hidden with the new pair, focus handed back
    assert_eq!(workflow.state(), WorkflowState::Hidden);
    assert_eq!(workflow.languages(), &LanguagePair::new("DE", "FR"));
    assert!(!surface.visible());
    assert_eq!(focus.restored().len(), 1);
}
