//! Whole-image conversions using [`imgref`] types.
//!
//! ```rust
//! use rgb::Rgba;
//! use splashbin::{Frame, imgref};
//!
//! let splash = vec![0u8; 288_000];
//! let img = imgref::device_to_img(Frame::new(&splash)).unwrap();
//! assert_eq!((img.width(), img.height()), (400, 240));
//!
//! let packed = imgref::img_to_device(img.as_ref()).unwrap();
//! assert_eq!(packed.data(), &splash[..]);
//! ```

use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};
use rgb::Rgba;

use crate::bitmap::{Bitmap, Frame};
use crate::SplashError;

fn into_img(bitmap: Bitmap) -> ImgVec<Rgba<u8>> {
    let (w, h) = (bitmap.width(), bitmap.height());
    let pixels: Vec<Rgba<u8>> = bytemuck::cast_slice(bitmap.data()).to_vec();
    ImgVec::new(pixels, w, h)
}

/// Collect the visible pixels of a possibly strided image as RGBA bytes.
fn contiguous_bytes(img: ImgRef<'_, Rgba<u8>>) -> Vec<u8> {
    let mut out = Vec::with_capacity(img.width() * img.height() * 4);
    for row in img.rows() {
        out.extend_from_slice(bytemuck::cast_slice(row));
    }
    out
}

/// Unpack a device frame into an `ImgVec<Rgba<u8>>`.
pub fn device_to_img(frame: Frame<'_>) -> Result<ImgVec<Rgba<u8>>, SplashError> {
    crate::device_to_rgba(frame).map(into_img)
}

/// Pack an RGBA image into a device bitmap. Strided images are accepted.
pub fn img_to_device(img: ImgRef<'_, Rgba<u8>>) -> Result<Bitmap, SplashError> {
    let bytes = contiguous_bytes(img);
    crate::rgba_to_device(Frame::with_size(&bytes, img.width(), img.height()))
}

/// Composite two screen images into the 400×480 preview.
///
/// Image dimensions must be exactly 400×240 (top) and 320×240 (bottom).
pub fn composite_preview_img(
    top: ImgRef<'_, Rgba<u8>>,
    bottom: ImgRef<'_, Rgba<u8>>,
) -> Result<ImgVec<Rgba<u8>>, SplashError> {
    let top = contiguous_bytes(top);
    let bottom = contiguous_bytes(bottom);
    crate::composite_preview(&[Frame::new(&top), Frame::new(&bottom)]).map(into_img)
}
