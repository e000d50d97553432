use std::time::{Duration, Instant};

use wikilook_config::watch::WatchConfig;

use crate::popup::{PopupHost, PopupView};
use crate::preprocess::normalize_selection;
use crate::state::ClipboardState;

/// Reads the current clipboard text
pub trait ClipboardSource {
    /// `None` when empty, non-text or unreadable
    fn read_text(&mut self) -> Option<String>;
}

/// Outcome of one `tick`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Too soon after the previous processed tick
    Debounced,
    /// Nothing selected and nothing to clear
    Idle,
    /// Same text as last time
    Unchanged,
    /// New text; the previous popup was closed and a new one requested
    Opened(String),
    /// Clipboard emptied; popup closed and last text forgotten
    Cleared,
}

/// Polls the clipboard and keeps at most one popup open for the latest text
pub struct SelectionWatcher<C, H: PopupHost> {
    clipboard: C,
    host: H,
    state: ClipboardState,
    popup: Option<H::Popup>,
    debounce: Duration,
}

impl<C: ClipboardSource, H: PopupHost> SelectionWatcher<C, H> {
    pub fn new(clipboard: C, host: H, config: &WatchConfig) -> Self {
        Self {
            clipboard,
            host,
            state: ClipboardState::default(),
            popup: None,
            debounce: config.debounce(),
        }
    }

    /// Safe to call from the poll timer, change notifications and the toolbar alike
    pub fn tick(&mut self) -> Transition {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Transition {
        if self.state.is_debounced(now, self.debounce) {
            return Transition::Debounced;
        }
        self.state.last_check = Some(now);

        let raw = self.clipboard.read_text();
        let Some(text) = normalize_selection(raw.as_deref()) else {
            let closed = self.close_popup();
            let forgot = self.state.last_text.take().is_some();
            return if closed || forgot {
                tracing::debug!("Clipboard cleared");
                Transition::Cleared
            } else {
                Transition::Idle
            };
        };

        if self.state.last_text.as_deref() == Some(text.as_str()) {
            return Transition::Unchanged;
        }

        self.close_popup();

        tracing::info!("New clipboard text: '{}'", text);
        match self.host.open(&text) {
            Ok(popup) => self.popup = Some(popup),
            Err(e) => tracing::warn!("Failed to open popup for '{}': {:#}", text, e),
        }

        // Remembered even on failure so the next tick does not retry
        self.state.last_text = Some(text.clone());
        Transition::Opened(text)
    }

    /// Returns whether a popup handle was held
    fn close_popup(&mut self) -> bool {
        let Some(mut popup) = self.popup.take() else {
            return false;
        };

        if !popup.is_closed() {
            popup.close();
        }
        true
    }

    pub fn last_text(&self) -> Option<&str> {
        self.state.last_text.as_deref()
    }

    pub fn state(&self) -> &ClipboardState {
        &self.state
    }

    pub fn popup(&self) -> Option<&H::Popup> {
        self.popup.as_ref()
    }

    pub fn has_open_popup(&self) -> bool {
        self.popup.as_ref().is_some_and(|p| !p.is_closed())
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}
