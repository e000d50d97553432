use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use wikilook_config::watch::WatchConfig;

use crate::{ClipboardSource, PopupHost, PopupView, SelectionWatcher, Transition};

#[derive(Default)]
struct ScriptedClipboard {
    text: Option<String>,
}

impl ScriptedClipboard {
    fn set(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

impl ClipboardSource for ScriptedClipboard {
    fn read_text(&mut self) -> Option<String> {
        self.text.clone()
    }
}

struct FakePopup {
    term: String,
    closed: Rc<Cell<bool>>,
    close_calls: Rc<Cell<usize>>,
}

impl PopupView for FakePopup {
    fn close(&mut self) {
        self.close_calls.set(self.close_calls.get() + 1);
        self.closed.set(true);
    }

    fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

#[derive(Default)]
struct RecordingHost {
    opened: RefCell<Vec<String>>,
    popups: RefCell<Vec<(Rc<Cell<bool>>, Rc<Cell<usize>>)>>,
    fail: bool,
}

impl RecordingHost {
    fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    fn is_closed(&self, index: usize) -> bool {
        self.popups.borrow()[index].0.get()
    }

    fn close_calls(&self, index: usize) -> usize {
        self.popups.borrow()[index].1.get()
    }

    /// Simulates the popup closing itself (timeout or Escape)
    fn dismiss(&self, index: usize) {
        self.popups.borrow()[index].0.set(true);
    }
}

impl PopupHost for RecordingHost {
    type Popup = FakePopup;

    fn open(&mut self, term: &str) -> anyhow::Result<FakePopup> {
        if self.fail {
            anyhow::bail!("no display");
        }

        let closed = Rc::new(Cell::new(false));
        let close_calls = Rc::new(Cell::new(0));
        self.opened.borrow_mut().push(term.to_string());
        self.popups
            .borrow_mut()
            .push((closed.clone(), close_calls.clone()));

        Ok(FakePopup {
            term: term.to_string(),
            closed,
            close_calls,
        })
    }
}

fn watcher() -> SelectionWatcher<ScriptedClipboard, RecordingHost> {
    SelectionWatcher::new(
        ScriptedClipboard::default(),
        RecordingHost::default(),
        &WatchConfig::default(),
    )
}

const STEP: Duration = Duration::from_millis(150);

#[test]
fn new_text_opens_popup_and_is_remembered() {
    let mut w = watcher();
    w.clipboard_mut().set("  Paris \n");

    let t = w.tick_at(Instant::now());

    assert_eq!(t, Transition::Opened("Paris".into()));
    assert_eq!(w.last_text(), Some("Paris"));
    assert_eq!(w.host().opened(), vec!["Paris"]);
    assert_eq!(w.popup().map(|p| p.term.as_str()), Some("Paris"));
    assert!(w.has_open_popup());
}

#[test]
fn same_text_is_a_no_op() {
    let mut w = watcher();
    let start = Instant::now();
    w.clipboard_mut().set("Paris");

    w.tick_at(start);
    let t = w.tick_at(start + STEP);

    assert_eq!(t, Transition::Unchanged);
    assert_eq!(w.host().opened().len(), 1);
    assert!(!w.host().is_closed(0));
}

#[test]
fn different_text_replaces_popup() {
    let mut w = watcher();
    let start = Instant::now();
    w.clipboard_mut().set("Paris");
    w.tick_at(start);

    w.clipboard_mut().set("London");
    let t = w.tick_at(start + STEP);

    assert_eq!(t, Transition::Opened("London".into()));
    assert!(w.host().is_closed(0));
    assert!(!w.host().is_closed(1));
    assert_eq!(w.host().opened(), vec!["Paris", "London"]);
    assert_eq!(w.last_text(), Some("London"));
}

#[test]
fn ticks_inside_debounce_window_are_dropped() {
    let mut w = watcher();
    let start = Instant::now();
    w.clipboard_mut().set("Paris");
    w.tick_at(start);

    w.clipboard_mut().set("London");
    let t = w.tick_at(start + Duration::from_millis(50));

    assert_eq!(t, Transition::Debounced);
    assert_eq!(w.host().opened(), vec!["Paris"]);
    assert_eq!(w.last_text(), Some("Paris"));

    // Dropped ticks do not move the window
    let t = w.tick_at(start + Duration::from_millis(100));
    assert_eq!(t, Transition::Opened("London".into()));
}

#[test]
fn emptied_clipboard_closes_popup_and_forgets_text() {
    let mut w = watcher();
    let start = Instant::now();
    w.clipboard_mut().set("Paris");
    w.tick_at(start);

    w.clipboard_mut().set("");
    let t = w.tick_at(start + STEP);

    assert_eq!(t, Transition::Cleared);
    assert!(w.host().is_closed(0));
    assert_eq!(w.last_text(), None);
    assert!(w.popup().is_none());

    let t = w.tick_at(start + STEP * 2);
    assert_eq!(t, Transition::Idle);
}

#[test]
fn same_text_after_clear_opens_again() {
    let mut w = watcher();
    let start = Instant::now();
    w.clipboard_mut().set("Paris");
    w.tick_at(start);
    w.clipboard_mut().set("   ");
    w.tick_at(start + STEP);

    w.clipboard_mut().set("Paris");
    let t = w.tick_at(start + STEP * 2);

    assert_eq!(t, Transition::Opened("Paris".into()));
    assert_eq!(w.host().opened(), vec!["Paris", "Paris"]);
}

#[test]
fn self_dismissed_popup_is_not_closed_twice() {
    let mut w = watcher();
    let start = Instant::now();
    w.clipboard_mut().set("Paris");
    w.tick_at(start);
    w.host().dismiss(0);
    assert!(!w.has_open_popup());

    w.clipboard_mut().set("London");
    w.tick_at(start + STEP);

    assert_eq!(w.host().close_calls(0), 0);
}

#[test]
fn dismissed_popup_is_not_reopened_for_unchanged_text() {
    let mut w = watcher();
    let start = Instant::now();
    w.clipboard_mut().set("Paris");
    w.tick_at(start);
    w.host().dismiss(0);

    let t = w.tick_at(start + STEP);

    assert_eq!(t, Transition::Unchanged);
    assert_eq!(w.host().opened().len(), 1);
}

#[test]
fn failed_open_still_remembers_text() {
    let mut w = SelectionWatcher::new(
        ScriptedClipboard::default(),
        RecordingHost {
            fail: true,
            ..RecordingHost::default()
        },
        &WatchConfig::default(),
    );
    let start = Instant::now();
    w.clipboard_mut().set("Paris");

    assert_eq!(w.tick_at(start), Transition::Opened("Paris".into()));
    assert!(w.popup().is_none());
    assert_eq!(w.tick_at(start + STEP), Transition::Unchanged);
}

#[test]
fn unreadable_clipboard_counts_as_empty() {
    let mut w = watcher();

    assert_eq!(w.tick_at(Instant::now()), Transition::Idle);
    assert!(w.state().last_check.is_some());
}
