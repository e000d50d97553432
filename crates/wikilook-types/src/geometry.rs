use serde::{Deserialize, Serialize};

/// Position in physical screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Area of one monitor in the virtual desktop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

impl Default for ScreenRect {
    fn default() -> Self {
        Self::new(0, 0, 1920, 1080)
    }
}

/// A monitor: its bounds plus the factor from logical to physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub bounds: ScreenRect,
    pub scale_factor: f32,
}

impl Screen {
    pub const fn new(bounds: ScreenRect, scale_factor: f32) -> Self {
        Self {
            bounds,
            scale_factor,
        }
    }

    /// Logical length in physical pixels on this monitor
    pub fn to_physical(&self, logical: u32) -> u32 {
        let scale = if self.scale_factor > 0.0 { self.scale_factor } else { 1.0 };
        (logical as f32 * scale).round() as u32
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(ScreenRect::default(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_far_edges() {
        let screen = ScreenRect::new(-1920, 0, 1920, 1080);
        assert!(screen.contains(Point::new(-1920, 0)));
        assert!(screen.contains(Point::new(-1, 1079)));
        assert!(!screen.contains(Point::new(0, 500)));
        assert!(!screen.contains(Point::new(-100, 1080)));
    }

    #[test]
    fn physical_lengths_follow_scale_factor() {
        let hidpi = Screen::new(ScreenRect::default(), 2.0);
        assert_eq!(hidpi.to_physical(550), 1100);

        let fractional = Screen::new(ScreenRect::default(), 1.25);
        assert_eq!(fractional.to_physical(20), 25);

        let bogus = Screen::new(ScreenRect::default(), 0.0);
        assert_eq!(bogus.to_physical(300), 300);
    }
}
