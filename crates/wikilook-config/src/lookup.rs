use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_endpoint() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

fn default_contact() -> String {
    "mailto:wikilook@example.com".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_thumbnail_size() -> u32 {
    400
}

fn default_cache_capacity() -> usize {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// MediaWiki `api.php` URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Contact part of the User-Agent, required by the Wikimedia API etiquette
    #[serde(default = "default_contact")]
    pub contact: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Requested thumbnail width in pixels
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            contact: default_contact(),
            timeout_ms: default_timeout_ms(),
            thumbnail_size: default_thumbnail_size(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl LookupConfig {
    pub fn new() -> Self {
        let endpoint = env::var("WIKILOOK_ENDPOINT").unwrap_or_else(|_| default_endpoint());
        let contact = env::var("WIKILOOK_CONTACT").unwrap_or_else(|_| default_contact());

        Self {
            endpoint,
            contact,
            timeout_ms: env_or("WIKILOOK_TIMEOUT_MS", default_timeout_ms()),
            thumbnail_size: default_thumbnail_size(),
            cache_capacity: env_or("WIKILOOK_CACHE_CAPACITY", default_cache_capacity()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn user_agent(&self) -> String {
        format!(
            "wikilook/{} ({}) rust-reqwest",
            env!("CARGO_PKG_VERSION"),
            self.contact
        )
    }
}
