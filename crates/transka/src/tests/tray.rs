use crate::{TrayIconState, tray_manager::truncate_tooltip, tray_surface::compose_tooltip};

use transka_core::{LanguagePair, WorkflowSnapshot, WorkflowState};

fn snapshot(state: WorkflowState, translating: bool) -> WorkflowSnapshot {
    WorkflowSnapshot {
        state,
        translating,
        languages: LanguagePair::new("CS", "EN-US"),
    }
}

/// WHAT: Each workflow state maps to its own icon, with translating winning
/// WHY: The tray icon is the only always-visible indicator
#[test]
fn given_snapshots_when_mapping_then_matching_icon_states() {
    // Given/When/Then
    assert_eq!(
        TrayIconState::from_snapshot(&snapshot(WorkflowState::Hidden, false)),
        TrayIconState::Hidden
    );
    assert_eq!(
        TrayIconState::from_snapshot(&snapshot(WorkflowState::Shown, false)),
        TrayIconState::Shown
    );
    assert_eq!(
        TrayIconState::from_snapshot(&snapshot(WorkflowState::Shown, true)),
        TrayIconState::Translating
    );
    assert_eq!(
        TrayIconState::from_snapshot(&snapshot(WorkflowState::Translated, false)),
        TrayIconState::Translated
    );
}

/// WHAT: Tooltips show the language pair and the status while shown
/// WHY: Without a window, the tooltip carries the status line
#[test]
fn given_pair_and_status_when_composing_tooltip_then_both_included() {
    // Given: CS → EN-US
    let pair = LanguagePair::new("CS", "EN-US");

    // When/Then
    assert_eq!(compose_tooltip(&pair, None), "Transka (CS → EN-US)");
    assert_eq!(
        compose_tooltip(&pair, Some("Translating...")),
        "Transka (CS → EN-US): Translating..."
    );
}

/// WHAT: Long tooltips are cut on a char boundary with an ellipsis
/// WHY: Platforms reject or clip long tooltips, and slicing bytes can split a char
#[test]
fn given_long_multibyte_text_when_truncating_then_fits_limit() {
    // Given: 200 Czech characters
    let text = "ž".repeat(200);

    // When: Truncating
    let short = truncate_tooltip(&text);

    // Then: 120 chars ending with an ellipsis
    assert_eq!(short.chars().count(), 120);
    assert!(short.ends_with('…'));
    assert_eq!(truncate_tooltip("short"), "short");
}
