use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use clipboard_rs::{
    ClipboardHandler, ClipboardWatcher, ClipboardWatcherContext, WatcherShutdown,
};

struct Notifier<F> {
    on_change: F,
}

impl<F: FnMut()> ClipboardHandler for Notifier<F> {
    fn on_clipboard_change(&mut self) {
        (self.on_change)();
    }
}

/// Running OS clipboard-change subscription. Stops on drop.
pub struct ChangeListener {
    shutdown: Option<WatcherShutdown>,
    join: Option<JoinHandle<()>>,
}

impl Drop for ChangeListener {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.stop();
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Call `on_change` from a helper thread whenever the OS reports a clipboard change.
///
/// The callback runs off the UI thread; it must only forward the notification.
pub fn listen_for_changes<F>(on_change: F) -> Result<ChangeListener>
where
    F: FnMut() + Send + 'static,
{
    let (ready_tx, ready_rx) = mpsc::channel();

    let join = thread::Builder::new()
        .name("clipboard-listener".into())
        .spawn(move || {
            let mut ctx = match ClipboardWatcherContext::new() {
                Ok(ctx) => ctx,
                Err(e) => {
                    let _ = ready_tx.send(Err(e.to_string()));
                    return;
                }
            };

            let shutdown = ctx
                .add_handler(Notifier { on_change })
                .get_shutdown_channel();
            if ready_tx.send(Ok(shutdown)).is_err() {
                return;
            }

            tracing::info!("Clipboard change listener started");
            ctx.start_watch();
            tracing::info!("Clipboard change listener stopped");
        })
        .context("Failed to spawn clipboard listener thread")?;

    let shutdown = ready_rx
        .recv()
        .context("Clipboard listener thread exited early")?
        .map_err(|e| anyhow::anyhow!("Failed to create clipboard watcher: {}", e))?;

    Ok(ChangeListener {
        shutdown: Some(shutdown),
        join: Some(join),
    })
}
