use anyhow::{Context, Result};
use image::RgbaImage;
use image::imageops::FilterType;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use wikilook_types::Size;

/// Largest box the image pane shows
pub const THUMBNAIL_BOUNDS: Size = Size::new(200, 200);

pub const IMAGE_FAILED: &str = "Image loading failed";

/// Decode and scale to fit `bounds`, keeping the aspect ratio
pub fn decode_thumbnail(bytes: &[u8], bounds: Size) -> Result<RgbaImage> {
    let decoded = image::load_from_memory(bytes).context("Failed to decode thumbnail")?;

    Ok(decoded
        .resize(bounds.width, bounds.height, FilterType::Triangle)
        .to_rgba8())
}

pub fn to_slint_image(rgba: &RgbaImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(rgba.as_raw(), rgba.width(), rgba.height());
    Image::from_rgba8(buffer)
}
