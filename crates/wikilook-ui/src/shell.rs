use anyhow::{Context, Result};
use slint::{CloseRequestResponse, ComponentHandle};

use crate::ShellWindow;

/// Background window with the manual "Look up" action.
///
/// Closing it ends the event loop even while a popup is still visible.
pub fn build_shell() -> Result<ShellWindow> {
    let shell = ShellWindow::new().context("Failed to create shell window")?;

    shell.window().on_close_requested(|| {
        tracing::info!("Shell closed, quitting");
        if let Err(e) = slint::quit_event_loop() {
            tracing::warn!("Failed to quit event loop: {}", e);
        }
        CloseRequestResponse::HideWindow
    });

    Ok(shell)
}
