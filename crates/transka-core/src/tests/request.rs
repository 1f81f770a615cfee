use crate::{LanguagePair, TranslationRequest};

/// WHAT: Swapping exchanges source and target
/// WHY: The swap hotkey flips translation direction
#[test]
fn given_explicit_pair_when_swapped_then_codes_exchanged() {
    // Given: CS → EN-US
    let pair = LanguagePair::new("CS", "EN-US");

    // When: Swapping
    let swapped = pair.swapped();

    // Then: EN-US → CS
    assert_eq!(swapped, Some(LanguagePair::new("EN-US", "CS")));
}

/// WHAT: Auto-detect source cannot be swapped, regardless of case
/// WHY: Auto-detect is not a valid target language
#[test]
fn given_auto_source_when_swapped_then_none() {
    // Given/When/Then: Both spellings refuse
    assert_eq!(LanguagePair::new("AUTO", "DE").swapped(), None);
    assert_eq!(LanguagePair::new("auto", "DE").swapped(), None);
}

/// WHAT: Display uses an arrow between the codes
/// WHY: The status line and tray tooltip show the pair this way
#[test]
fn given_pair_when_displayed_then_arrow_format() {
    // Given/When/Then
    assert_eq!(LanguagePair::new("CS", "EN-US").to_string(), "CS → EN-US");
}

/// WHAT: Captured text is trimmed and blank input yields no request
/// WHY: Whitespace never reaches the translator
#[test]
#[allow(clippy::unwrap_used)]
fn given_padded_or_blank_input_when_captured_then_trimmed_or_none() {
    // Given: A pair
    let pair = LanguagePair::new("CS", "EN-US");

    // When: Capturing padded and blank text
    let padded = TranslationRequest::capture("  Ahoj\n", &pair).unwrap();
    let blank = TranslationRequest::capture(" \t\n", &pair);

    // Then: Trimmed text with the pair, and nothing for blank input
    assert_eq!(padded.text, "Ahoj");
    assert_eq!(padded.languages, pair);
    assert!(blank.is_none());
}
