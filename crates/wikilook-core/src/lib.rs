pub mod popup;
pub mod preprocess;
pub mod state;
pub mod watcher;

pub use popup::{PopupHost, PopupView};
pub use preprocess::normalize_selection;
pub use state::ClipboardState;
pub use watcher::{ClipboardSource, SelectionWatcher, Transition};

#[cfg(test)]
mod tests {
    mod watcher_tests;
}
