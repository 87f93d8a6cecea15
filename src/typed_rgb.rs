//! Typed pixel views using [`rgb`] crate types via bytemuck.
//!
//! Views are zero-copy reinterpretations of a [`Bitmap`]'s bytes.
//!
//! ```rust
//! use rgb::Rgba;
//! use splashbin::{Frame, device_to_rgba, typed_rgb};
//!
//! let splash = vec![0u8; 230_400];
//! let bitmap = device_to_rgba(Frame::new(&splash)).unwrap();
//! let pixels: &[Rgba<u8>] = typed_rgb::rgba_pixels(&bitmap).unwrap();
//! assert_eq!(pixels.len(), 320 * 240);
//! assert_eq!(pixels[0], Rgba::new(0, 0, 0, 255));
//! ```

use rgb::{Bgr, Rgba};

use crate::bitmap::{Bitmap, Frame};
use crate::geometry::PixelLayout;
use crate::SplashError;

/// View an RGBA bitmap as `Rgba<u8>` pixels, row-major.
///
/// `None` for device-layout bitmaps.
pub fn rgba_pixels(bitmap: &Bitmap) -> Option<&[Rgba<u8>]> {
    match bitmap.layout() {
        PixelLayout::Rgba => Some(bytemuck::cast_slice(bitmap.data())),
        PixelLayout::Device => None,
    }
}

/// View a device bitmap as `Bgr<u8>` pixels in device scan order.
///
/// `None` for RGBA bitmaps.
pub fn device_pixels(bitmap: &Bitmap) -> Option<&[Bgr<u8>]> {
    match bitmap.layout() {
        PixelLayout::Device => Some(bytemuck::cast_slice(bitmap.data())),
        PixelLayout::Rgba => None,
    }
}

/// Pack row-major `Rgba<u8>` pixels into a device bitmap.
pub fn rgba_pixels_to_device(
    pixels: &[Rgba<u8>],
    width: usize,
    height: usize,
) -> Result<Bitmap, SplashError> {
    let bytes: &[u8] = bytemuck::cast_slice(pixels);
    crate::rgba_to_device(Frame::with_size(bytes, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn views_follow_layout() {
        let device = vec![1u8, 2, 3, 4, 5, 6];
        let rgba = crate::device_to_rgba(Frame::with_size(&device, 1, 2)).unwrap();
        let px = rgba_pixels(&rgba).unwrap();
        assert_eq!(px, &[Rgba::new(6, 5, 4, 255), Rgba::new(3, 2, 1, 255)]);
        assert!(device_pixels(&rgba).is_none());

        let back = rgba_pixels_to_device(px, 1, 2).unwrap();
        let bgr = device_pixels(&back).unwrap();
        assert_eq!(bgr[0], Bgr { b: 1, g: 2, r: 3 });
        assert!(rgba_pixels(&back).is_none());
    }
}
