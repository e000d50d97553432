use wikilook_types::{Point, Screen, ScreenRect, Size};

/// Top-left corner for a popup of `size` shown next to `cursor`.
///
/// Prefers `margin` below-right of the cursor, clamps to the far screen edge,
/// and flips to the other side of the cursor if it still does not fit.
pub fn place_popup(cursor: Point, size: Size, screen: ScreenRect, margin: u32) -> Point {
    Point::new(
        place_axis(cursor.x, size.width, screen.x, screen.right(), margin),
        place_axis(cursor.y, size.height, screen.y, screen.bottom(), margin),
    )
}

/// [`place_popup`] with the popup size and margin given in logical pixels,
/// converted with the monitor's own scale factor
pub fn place_on_screen(cursor: Point, logical: Size, screen: &Screen, margin: u32) -> Point {
    let size = Size::new(
        screen.to_physical(logical.width),
        screen.to_physical(logical.height),
    );
    place_popup(cursor, size, screen.bounds, screen.to_physical(margin))
}

fn place_axis(cursor: i32, extent: u32, start: i32, end: i32, margin: u32) -> i32 {
    let extent = extent as i32;
    let margin = margin as i32;

    let mut pos = cursor + margin;
    if pos + extent > end {
        pos = end - extent;
    }
    if pos < start {
        pos = (cursor - extent - margin).max(start);
    }
    pos
}
