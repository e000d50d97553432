use std::cell::RefCell;
use std::rc::Rc;

use slint::{ComponentHandle, Timer, TimerMode, Weak};
use wikilook_config::watch::WatchConfig;
use wikilook_core::{ClipboardSource, PopupHost, SelectionWatcher, Transition};
use wikilook_io::ChangeListener;
use wikilook_ui::ShellWindow;

/// What caused a tick, for logs
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    Poll,
    ClipboardChanged,
    Manual,
}

type SharedWatcher<C, H> = Rc<RefCell<SelectionWatcher<C, H>>>;

/// Wires the watcher to its three triggers and mirrors results into the shell
pub struct AppController<C, H: PopupHost> {
    watcher: SharedWatcher<C, H>,
    shell: Weak<ShellWindow>,
    poll_timer: Timer,
    listener: RefCell<Option<ChangeListener>>,
}

impl<C, H> AppController<C, H>
where
    C: ClipboardSource + 'static,
    H: PopupHost + 'static,
{
    pub fn new(watcher: SelectionWatcher<C, H>, shell: &ShellWindow) -> Self {
        Self {
            watcher: Rc::new(RefCell::new(watcher)),
            shell: shell.as_weak(),
            poll_timer: Timer::default(),
            listener: RefCell::new(None),
        }
    }

    pub fn start(&self, config: &WatchConfig) {
        let Some(shell) = self.shell.upgrade() else {
            return;
        };

        shell.on_look_up(self.tick_fn(Trigger::Manual));
        shell.on_clipboard_changed(self.tick_fn(Trigger::ClipboardChanged));

        self.poll_timer.start(
            TimerMode::Repeated,
            config.poll_interval(),
            self.tick_fn(Trigger::Poll),
        );
        tracing::info!("Polling clipboard every {:?}", config.poll_interval());

        if config.listen_for_changes {
            let shell = self.shell.clone();
            // Runs on the listener thread; hop to the UI thread before touching the watcher
            let listener = wikilook_io::listen_for_changes(move || {
                if let Err(e) = shell.upgrade_in_event_loop(|s| s.invoke_clipboard_changed()) {
                    tracing::debug!("Dropped clipboard notification: {}", e);
                }
            });

            match listener {
                Ok(l) => *self.listener.borrow_mut() = Some(l),
                Err(e) => tracing::warn!("Clipboard notifications unavailable, polling only: {:#}", e),
            }
        }
    }

    fn tick_fn(&self, trigger: Trigger) -> impl Fn() + 'static + use<C, H> {
        let watcher = Rc::clone(&self.watcher);
        let shell = self.shell.clone();
        move || run_tick(&watcher, &shell, trigger)
    }

    pub fn shutdown(&self) {
        self.poll_timer.stop();
        self.listener.borrow_mut().take();
    }
}

fn run_tick<C, H>(watcher: &SharedWatcher<C, H>, shell: &Weak<ShellWindow>, trigger: Trigger)
where
    C: ClipboardSource,
    H: PopupHost,
{
    // A tick already in progress owns the watcher; this one is dropped like a debounced tick
    let Ok(mut watcher) = watcher.try_borrow_mut() else {
        tracing::debug!("{:?} tick skipped, watcher busy", trigger);
        return;
    };

    let transition = watcher.tick();
    drop(watcher);

    if let Some(status) = status_line(&transition) {
        tracing::debug!("{:?} tick: {:?}", trigger, transition);
        if let Some(shell) = shell.upgrade() {
            shell.set_status(status.into());
        }
    }
}

fn status_line(transition: &Transition) -> Option<String> {
    match transition {
        Transition::Opened(term) => Some(format!("Looked up: {term}")),
        Transition::Cleared => Some("Waiting for clipboard text.".to_string()),
        Transition::Debounced | Transition::Idle | Transition::Unchanged => None,
    }
}
