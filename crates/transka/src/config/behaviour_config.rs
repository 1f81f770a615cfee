use crate::config::{default_auto_paste, default_notifications};

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Whether to paste the translation into the previous window after copying it.
    #[serde(default = "default_auto_paste")]
    pub auto_paste: bool,

    /// Whether translations and failures raise desktop notifications.
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            auto_paste: default_auto_paste(),
            notifications: default_notifications(),
        }
    }
}
