use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::popup::PopupConfig;
use self::watch::WatchConfig;

pub mod lookup;
pub mod popup;
pub mod watch;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub watch: WatchConfig,
    pub popup: PopupConfig,
}

impl Config {
    /// Defaults, overridden by any `WIKILOOK_*` variables present in the environment
    pub fn new() -> Self {
        Config {
            lookup: LookupConfig::new(),
            watch: WatchConfig::new(),
            popup: PopupConfig::new(),
        }
    }
}

/// Parse an environment variable, ignoring it when unset or malformed
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
