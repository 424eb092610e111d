//! Photo compression applied to uploads before they reach storage.
//!
//! Uploaded headshots and banners are frequently straight off a phone
//! camera. They are scaled down to a fixed maximum width and re-encoded as
//! JPEG so the public roster pages stay light.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::CoreError;

/// Widest photo kept after compression, in pixels.
pub const MAX_PHOTO_WIDTH: u32 = 800;

/// JPEG quality used for re-encoding (0-100).
pub const JPEG_QUALITY: u8 = 80;

/// Target dimensions for an image of `width` x `height`.
///
/// Images no wider than [`MAX_PHOTO_WIDTH`] keep their size; wider images
/// are scaled down proportionally. Height never drops below one pixel.
pub fn target_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width <= MAX_PHOTO_WIDTH {
        return (width, height);
    }
    let scaled = (u64::from(height) * u64::from(MAX_PHOTO_WIDTH)) / u64::from(width);
    (MAX_PHOTO_WIDTH, scaled.max(1) as u32)
}

/// Decode `bytes`, downscale if needed, and re-encode as JPEG.
pub fn compress_photo(bytes: &[u8]) -> Result<Vec<u8>, CoreError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| CoreError::Validation(format!("Unsupported or corrupt image: {e}")))?;

    let (width, height) = target_dimensions(decoded.width(), decoded.height());
    let resized = if (width, height) == (decoded.width(), decoded.height()) {
        decoded
    } else {
        decoded.resize_exact(width, height, FilterType::Triangle)
    };

    encode_jpeg(&resized)
}

fn encode_jpeg(img: &DynamicImage) -> Result<Vec<u8>, CoreError> {
    // JPEG has no alpha channel.
    let rgb = img.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| CoreError::Internal(format!("JPEG encoding failed: {e}")))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use assert_matches::assert_matches;
    use image::{ImageFormat, RgbaImage};

    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([200, 16, 46, 255]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .expect("png encoding should succeed");
        buf.into_inner()
    }

    #[test]
    fn small_images_keep_dimensions() {
        assert_eq!(target_dimensions(640, 480), (640, 480));
        assert_eq!(target_dimensions(800, 1200), (800, 1200));
    }

    #[test]
    fn wide_images_scale_to_max_width() {
        assert_eq!(target_dimensions(1600, 1200), (800, 600));
        assert_eq!(target_dimensions(4000, 3), (800, 1));
    }

    #[test]
    fn compress_downscales_and_reencodes_as_jpeg() {
        let out = compress_photo(&png_bytes(1600, 400)).expect("compression should succeed");

        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (800, 200));
    }

    #[test]
    fn compress_keeps_small_photo_size() {
        let out = compress_photo(&png_bytes(120, 90)).expect("compression should succeed");
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (120, 90));
    }

    #[test]
    fn garbage_input_is_a_validation_error() {
        assert_matches!(
            compress_photo(b"definitely not an image"),
            Err(CoreError::Validation(_))
        );
    }
}
