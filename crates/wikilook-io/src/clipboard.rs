use arboard::Clipboard;
use wikilook_core::ClipboardSource;

/// The OS copy buffer (not the X11/Wayland primary selection)
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            clipboard: open_clipboard(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn open_clipboard() -> Option<Clipboard> {
    match Clipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {}", e);
            None
        }
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        if self.clipboard.is_none() {
            self.clipboard = open_clipboard();
        }

        let clipboard = self.clipboard.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(e) => {
                tracing::debug!("Clipboard read failed: {}", e);
                // Reopen on the next tick; the handle may be stale
                self.clipboard = None;
                None
            }
        }
    }
}
