pub mod geometry;
pub mod types;

pub use geometry::{Point, Screen, ScreenRect, Size};
pub use types::LookupResult;
