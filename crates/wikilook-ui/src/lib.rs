pub mod document;
mod lifetime;
pub mod placement;
pub mod popup;
pub mod shell;
pub mod thumbnail;

pub use popup::{Popup, SlintPopupHost};
pub use shell::build_shell;

slint::include_modules!();
