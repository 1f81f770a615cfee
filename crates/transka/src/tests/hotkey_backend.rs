use crate::hotkey_backend::parse_hotkey;

use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use transka_core::CoreError;

/// WHAT: Lowercase combinations parse to the expected key
/// WHY: Settings use the "ctrl+alt+t" spelling
#[test]
#[allow(clippy::unwrap_used)]
fn given_lowercase_combination_when_parsing_then_matches_hotkey() {
    // Given: The default main combination
    let expected = HotKey::new(Some(Modifiers::CONTROL | Modifiers::ALT), Code::KeyT);

    // When: Parsing it, with surrounding whitespace and mixed case
    let parsed = parse_hotkey(" ctrl+alt+t ").unwrap();
    let shouted = parse_hotkey("CTRL+ALT+T").unwrap();

    // Then: Same id as the hand-built hotkey
    assert_eq!(parsed.id(), expected.id());
    assert_eq!(shouted.id(), expected.id());
}

/// WHAT: Distinct combinations get distinct ids
/// WHY: Press routing relies on ids being unique per combination
#[test]
#[allow(clippy::unwrap_used)]
fn given_default_combinations_when_parsing_then_ids_differ() {
    // Given/When: The three defaults
    let main = parse_hotkey("ctrl+alt+t").unwrap();
    let swap = parse_hotkey("ctrl+alt+s").unwrap();
    let clear = parse_hotkey("ctrl+alt+c").unwrap();

    // Then: Three distinct ids
    assert_ne!(main.id(), swap.id());
    assert_ne!(main.id(), clear.id());
    assert_ne!(swap.id(), clear.id());
}

/// WHAT: A combination without a key is rejected
/// WHY: Registration must fail with InvalidHotkey, not panic
#[test]
fn given_incomplete_combination_when_parsing_then_invalid_hotkey() {
    // Given/When: Modifiers only, and garbage
    let dangling = parse_hotkey("ctrl+");
    let garbage = parse_hotkey("ctrl+alt+notakey");

    // Then: Both rejected with the offending text
    assert!(matches!(
        dangling,
        Err(CoreError::InvalidHotkey { spec, .. }) if spec == "ctrl+"
    ));
    assert!(garbage.is_err());
}
