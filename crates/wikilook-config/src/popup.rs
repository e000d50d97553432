use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_width() -> u32 {
    550
}

fn default_height() -> u32 {
    300
}

fn default_cursor_margin() -> u32 {
    20
}

fn default_dismiss_after_ms() -> u64 {
    10_000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PopupConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Gap between the cursor and the popup corner
    #[serde(default = "default_cursor_margin")]
    pub cursor_margin: u32,
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            cursor_margin: default_cursor_margin(),
            dismiss_after_ms: default_dismiss_after_ms(),
        }
    }
}

impl PopupConfig {
    pub fn new() -> Self {
        Self {
            dismiss_after_ms: env_or("WIKILOOK_DISMISS_MS", default_dismiss_after_ms()),
            ..Self::default()
        }
    }

    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}
