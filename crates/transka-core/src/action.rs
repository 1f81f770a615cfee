use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Named global hotkey actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotkeyAction {
    /// Drives the show / translate / copy-and-hide cycle.
    Main,
    /// Exchanges source and target language.
    Swap,
    /// Empties the input region.
    Clear,
}

impl HotkeyAction {
    /// Every action, in registration order.
    pub const ALL: [HotkeyAction; 3] = [HotkeyAction::Main, HotkeyAction::Swap, HotkeyAction::Clear];

    /// Stable lowercase name used in settings and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            HotkeyAction::Main => "main",
            HotkeyAction::Swap => "swap",
            HotkeyAction::Clear => "clear",
        }
    }
}

impl fmt::Display for HotkeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotkeyAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(HotkeyAction::Main),
            "swap" => Ok(HotkeyAction::Swap),
            "clear" => Ok(HotkeyAction::Clear),
            other => Err(format!("unknown hotkey action '{other}'")),
        }
    }
}
