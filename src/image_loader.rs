//! Room photo loading
//!
//! This module turns uploaded bytes, files on disk, or raw pixel buffers into
//! an RGBA image ready for palette extraction.
//!
//! ## Supported Formats
//!
//! Decoding goes through the `image` crate: JPEG, PNG, GIF (first frame),
//! WebP, TIFF and BMP.
//!
//! ## Design
//!
//! Everything is converted to 8-bit RGBA so transparent regions can be
//! skipped during extraction. No EXIF orientation is applied: palette
//! extraction does not depend on orientation.

use std::path::Path;

use image::{DynamicImage, ImageReader, RgbaImage};

use crate::error::{MatchError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Tiff => image::ImageFormat::Tiff,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Load an image from disk as RGBA
///
/// # Errors
///
/// Returns `MatchError::InvalidParameter` for unsupported extensions and
/// `MatchError::ImageLoadError` if the file cannot be opened or decoded.
///
/// # Example
///
/// ```rust,no_run
/// use room_palette::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("room.jpg"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), room_palette::MatchError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let format = ImageFormat::from_extension(path).ok_or_else(|| MatchError::InvalidParameter {
        parameter: "image".into(),
        value: path.display().to_string(),
    })?;

    let mut reader = ImageReader::open(path).map_err(|e| {
        MatchError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    reader.set_format(format.to_image_format());

    let img: DynamicImage = reader.decode().map_err(|e| {
        MatchError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgba8())
}

/// Decode uploaded image bytes as RGBA, guessing the format from content
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| MatchError::image_load("Failed to decode uploaded image", e))?;
    Ok(img.to_rgba8())
}

/// Wrap an already-decoded RGBA buffer
///
/// # Errors
///
/// Returns `MatchError::InvalidPixelBuffer` when `data` is not exactly
/// `width * height * 4` bytes long.
pub fn from_raw_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage> {
    let expected = width as usize * height as usize * 4;
    let actual = data.len();
    if actual != expected {
        return Err(MatchError::InvalidPixelBuffer {
            width,
            height,
            expected,
            actual,
        });
    }

    RgbaImage::from_raw(width, height, data).ok_or(MatchError::InvalidPixelBuffer {
        width,
        height,
        expected,
        actual,
    })
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
