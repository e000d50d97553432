use std::time::{Duration, Instant};

/// What the watcher saw on its last processed tick
#[derive(Debug, Clone, Default)]
pub struct ClipboardState {
    pub last_text: Option<String>,
    pub last_check: Option<Instant>,
}

impl ClipboardState {
    /// Whether a tick at `now` falls inside the debounce window of the previous one
    pub fn is_debounced(&self, now: Instant, window: Duration) -> bool {
        self.last_check
            .is_some_and(|last| now.saturating_duration_since(last) < window)
    }
}
