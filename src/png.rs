//! PNG output and input through the [`image`] crate.
//!
//! The splash core only produces RGBA buffers; container encoding and
//! decoding are delegated to `image`.
//!
//! ```rust
//! use splashbin::{Frame, png};
//!
//! let splash = vec![0u8; 230_400];
//! let img = png::device_to_image(Frame::new(&splash)).unwrap();
//! assert_eq!(img.dimensions(), (320, 240));
//!
//! let encoded = png::encode_png(&img).unwrap();
//! let decoded = png::decode_png(&encoded).unwrap();
//! let packed = png::image_to_device(&decoded).unwrap();
//! assert_eq!(packed.data(), &splash[..]);
//! ```

use std::fmt;
use std::vec::Vec;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};

use crate::bitmap::{Bitmap, Frame};
use crate::geometry::PixelLayout;
use crate::SplashError;

/// Failure of a conversion that involves the image codec.
#[derive(Debug)]
pub enum ImageError {
    /// The pixel conversion itself was refused.
    Splash(SplashError),
    /// Encoding or decoding failed.
    Codec(image::ImageError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Splash(e) => fmt::Display::fmt(e, f),
            ImageError::Codec(e) => write!(f, "image codec: {e}"),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Splash(e) => Some(e),
            ImageError::Codec(e) => Some(e),
        }
    }
}

impl From<SplashError> for ImageError {
    fn from(e: SplashError) -> Self {
        ImageError::Splash(e)
    }
}

impl From<image::ImageError> for ImageError {
    fn from(e: image::ImageError) -> Self {
        ImageError::Codec(e)
    }
}

/// Hand a bitmap to the codec as an `RgbaImage`.
///
/// Device-layout bitmaps are unpacked to RGBA first.
pub fn bitmap_to_image(bitmap: Bitmap) -> Result<RgbaImage, ImageError> {
    let bitmap = match bitmap.layout() {
        PixelLayout::Rgba => bitmap,
        PixelLayout::Device => crate::device_to_rgba(bitmap.as_frame())?,
    };
    let (w, h) = dimensions(bitmap.width(), bitmap.height())?;
    RgbaImage::from_raw(w, h, bitmap.into_data())
        .ok_or(ImageError::Splash(SplashError::InvalidData))
}

/// Unpack a device frame straight into an `RgbaImage`.
pub fn device_to_image(frame: Frame<'_>) -> Result<RgbaImage, ImageError> {
    bitmap_to_image(crate::device_to_rgba(frame)?)
}

/// Composite `[top, bottom]` and return the preview as an `RgbaImage`.
pub fn preview_to_image(frames: &[Frame<'_>]) -> Result<RgbaImage, ImageError> {
    bitmap_to_image(crate::composite_preview(frames)?)
}

/// Pack a decoded image into device format.
pub fn image_to_device(img: &RgbaImage) -> Result<Bitmap, ImageError> {
    let frame = Frame::with_size(img.as_raw(), img.width() as usize, img.height() as usize);
    Ok(crate::rgba_to_device(frame)?)
}

/// Encode an RGBA image as PNG.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    debug!(
        "encoded {}x{} png ({} bytes)",
        img.width(),
        img.height(),
        buf.len()
    );
    Ok(buf)
}

/// Decode a PNG into RGBA, whatever its stored colour type.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, ImageError> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
    Ok(img.into_rgba8())
}

fn dimensions(width: usize, height: usize) -> Result<(u32, u32), SplashError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(SplashError::InvalidData),
    }
}
