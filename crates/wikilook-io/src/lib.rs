pub mod clipboard;
pub mod cursor;
pub mod listener;
pub mod screen;

pub use clipboard::SystemClipboard;
pub use cursor::cursor_position;
pub use listener::{ChangeListener, listen_for_changes};
pub use screen::screen_at;
