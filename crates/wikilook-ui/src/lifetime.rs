use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use slint::{ComponentHandle, PlatformError, Timer, TimerMode};

use crate::PopupWindow;

/// The part of a popup window its lifetime needs to control
pub(crate) trait PopupSurface {
    fn hide(&self) -> Result<(), PlatformError>;
}

impl PopupSurface for PopupWindow {
    fn hide(&self) -> Result<(), PlatformError> {
        ComponentHandle::hide(self)
    }
}

/// Destroyed flag plus inactivity timer for one popup surface.
///
/// Every close path (owner, timeout, Escape, window close, drop) ends in
/// [`PopupLifetime::close`], which hides the surface at most once.
pub(crate) struct PopupLifetime<W: PopupSurface> {
    surface: W,
    title: String,
    closed: Cell<bool>,
    dismiss_timer: Timer,
}

impl<W: PopupSurface + 'static> PopupLifetime<W> {
    pub(crate) fn new(surface: W, title: String) -> Rc<Self> {
        Rc::new(Self {
            surface,
            title,
            closed: Cell::new(false),
            dismiss_timer: Timer::default(),
        })
    }

    pub(crate) fn surface(&self) -> &W {
        &self.surface
    }

    /// Start the single-shot inactivity timer
    pub(crate) fn arm(self: &Rc<Self>, after: Duration) {
        let weak = Rc::downgrade(self);
        self.dismiss_timer.start(TimerMode::SingleShot, after, move || {
            close_weak(&weak, "timed out")
        });
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.dismiss_timer.running()
    }

    pub(crate) fn close(&self) {
        if self.closed.replace(true) {
            return;
        }

        self.dismiss_timer.stop();
        if let Err(e) = self.surface.hide() {
            tracing::warn!("Failed to hide popup '{}': {}", self.title, e);
        }
        tracing::debug!("Closed popup '{}'", self.title);
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl<W: PopupSurface> Drop for PopupLifetime<W> {
    fn drop(&mut self) {
        if !self.closed.replace(true) {
            self.dismiss_timer.stop();
            let _ = self.surface.hide();
        }
    }
}

/// Close through a weak handle, as the window's own callbacks do
pub(crate) fn close_weak<W: PopupSurface + 'static>(
    lifetime: &Weak<PopupLifetime<W>>,
    reason: &str,
) {
    if let Some(lifetime) = lifetime.upgrade() {
        tracing::debug!("Popup {}", reason);
        lifetime.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        hides: Rc<Cell<usize>>,
    }

    impl PopupSurface for CountingSurface {
        fn hide(&self) -> Result<(), PlatformError> {
            self.hides.set(self.hides.get() + 1);
            Ok(())
        }
    }

    fn lifetime() -> (Rc<PopupLifetime<CountingSurface>>, Rc<Cell<usize>>) {
        let surface = CountingSurface::default();
        let hides = surface.hides.clone();
        (PopupLifetime::new(surface, "Paris".into()), hides)
    }

    #[test]
    fn close_twice_hides_once() {
        let (popup, hides) = lifetime();
        assert!(!popup.is_closed());

        popup.close();
        popup.close();

        assert!(popup.is_closed());
        assert_eq!(hides.get(), 1);
    }

    #[test]
    fn close_stops_dismiss_timer() {
        let (popup, _) = lifetime();
        popup.arm(Duration::from_secs(10));
        assert!(popup.is_armed());

        popup.close();

        assert!(!popup.is_armed());
    }

    #[test]
    fn weak_close_path_sets_destroyed_flag() {
        let (popup, hides) = lifetime();
        popup.arm(Duration::from_secs(10));
        let weak = Rc::downgrade(&popup);

        close_weak(&weak, "dismissed");

        assert!(popup.is_closed());
        assert!(!popup.is_armed());
        assert_eq!(hides.get(), 1);
    }

    #[test]
    fn weak_close_after_drop_is_a_no_op() {
        let (popup, hides) = lifetime();
        let weak = Rc::downgrade(&popup);
        drop(popup);

        close_weak(&weak, "timed out");

        assert_eq!(hides.get(), 1);
    }

    #[test]
    fn drop_hides_open_popup_once() {
        let (popup, hides) = lifetime();
        drop(popup);
        assert_eq!(hides.get(), 1);

        let (popup, hides) = lifetime();
        popup.close();
        drop(popup);
        assert_eq!(hides.get(), 1);
    }
}
