/// A live popup as seen by its owner
pub trait PopupView {
    /// Idempotent; a second call is a no-op
    fn close(&mut self);

    /// True once closed by any path (owner, timeout, Escape)
    fn is_closed(&self) -> bool;
}

/// Creates popups for looked-up terms
pub trait PopupHost {
    type Popup: PopupView;

    /// Build and show a popup for `term`. Blocks while the lookup runs.
    fn open(&mut self, term: &str) -> anyhow::Result<Self::Popup>;
}
