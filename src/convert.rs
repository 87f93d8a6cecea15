//! Allocating conversions between the device layout and RGBA.

use alloc::vec;

use crate::bitmap::{Bitmap, Frame};
use crate::bytes::{self, Direction};
use crate::geometry::{PixelLayout, Resolution, infer_resolution};
use crate::SplashError;

/// Unpack a rotated BGR888 device frame into a row-major RGBA bitmap.
///
/// Without usable dimensions the resolution is inferred from the buffer
/// length (288000 → 400×240, 230400 → 320×240). Every output pixel is opaque.
///
/// # Errors
///
/// - [`SplashError::InvalidData`] when the frame has no buffer.
/// - [`SplashError::ResolutionUndeterminable`] when no dimensions were given
///   and the length is not a splash size.
/// - [`SplashError::SizeMismatch`] when `width × height × 3` differs from the
///   buffer length.
pub fn device_to_rgba(frame: Frame<'_>) -> Result<Bitmap, SplashError> {
    let result = unpack(frame);
    log_outcome("device->rgba", &result);
    result
}

fn unpack(frame: Frame<'_>) -> Result<Bitmap, SplashError> {
    let data = frame.data.ok_or(SplashError::InvalidData)?;
    let res = match frame.resolution() {
        Some(res) => res,
        None => infer_resolution(data.len())
            .ok_or(SplashError::ResolutionUndeterminable { len: data.len() })?,
    };
    let out_len = checked_len(data.len(), res, PixelLayout::Device, PixelLayout::Rgba)?;
    let mut out = vec![0u8; out_len];
    bytes::transpose(
        Direction::Unpack {
            device: data,
            rgba: &mut out,
        },
        res.width,
        res.height,
    )?;
    Ok(Bitmap::new_unchecked(out, res, PixelLayout::Rgba))
}

/// Pack a row-major RGBA frame into the rotated BGR888 device layout.
///
/// Alpha is discarded. For any device buffer `b`,
/// `rgba_to_device(device_to_rgba(b))` reproduces `b` exactly.
///
/// # Errors
///
/// - [`SplashError::InvalidData`] when the frame has no buffer.
/// - [`SplashError::EmptyData`] when the buffer is empty.
/// - [`SplashError::SizeMismatch`] when dimensions are missing or
///   `width × height × 4` differs from the buffer length.
pub fn rgba_to_device(frame: Frame<'_>) -> Result<Bitmap, SplashError> {
    let result = pack(frame);
    log_outcome("rgba->device", &result);
    result
}

fn pack(frame: Frame<'_>) -> Result<Bitmap, SplashError> {
    let data = frame.data.ok_or(SplashError::InvalidData)?;
    if data.is_empty() {
        return Err(SplashError::EmptyData);
    }
    let res = Resolution::new(frame.width.unwrap_or(0), frame.height.unwrap_or(0));
    let out_len = checked_len(data.len(), res, PixelLayout::Rgba, PixelLayout::Device)?;
    let mut out = vec![0u8; out_len];
    bytes::transpose(
        Direction::Pack {
            rgba: data,
            device: &mut out,
        },
        res.width,
        res.height,
    )?;
    Ok(Bitmap::new_unchecked(out, res, PixelLayout::Device))
}

/// Validate `len` against `res` in layout `from` and return the output size.
fn checked_len(
    len: usize,
    res: Resolution,
    from: PixelLayout,
    to: PixelLayout,
) -> Result<usize, SplashError> {
    if bytes::expected_len(res.width, res.height, from, len)? != len {
        return Err(SplashError::SizeMismatch {
            width: res.width,
            height: res.height,
            layout: from,
            len,
        });
    }
    Ok(len / from.bytes_per_pixel() * to.bytes_per_pixel())
}

fn log_outcome(what: &str, result: &Result<Bitmap, SplashError>) {
    match result {
        Ok(bitmap) => {
            debug!(
                "{}: {} ({} bytes)",
                what,
                bitmap.resolution(),
                bitmap.data().len()
            );
        }
        Err(e) => {
            debug!("{} rejected: {}", what, e);
        }
    }
}
