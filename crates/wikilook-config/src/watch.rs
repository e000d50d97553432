use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_listen_for_changes() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WatchConfig {
    /// Clipboard poll period
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Ticks closer than this to the previous processed tick are dropped
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Also react to OS clipboard-change notifications, not only the poll timer
    #[serde(default = "default_listen_for_changes")]
    pub listen_for_changes: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            debounce_ms: default_debounce_ms(),
            listen_for_changes: default_listen_for_changes(),
        }
    }
}

impl WatchConfig {
    pub fn new() -> Self {
        Self {
            poll_interval_ms: env_or("WIKILOOK_POLL_MS", default_poll_interval_ms()),
            debounce_ms: default_debounce_ms(),
            listen_for_changes: env_or("WIKILOOK_LISTEN_CHANGES", default_listen_for_changes()),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
