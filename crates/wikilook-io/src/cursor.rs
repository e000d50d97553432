use mouse_position::mouse_position::Mouse;
use wikilook_types::Point;

/// Global cursor position in physical pixels, if the platform reports one
pub fn cursor_position() -> Option<Point> {
    match Mouse::get_mouse_position() {
        Mouse::Position { x, y } => Some(Point::new(x, y)),
        Mouse::Error => {
            tracing::debug!("Failed to get cursor position");
            None
        }
    }
}
