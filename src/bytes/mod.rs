// ---------------------------------------------------------------------------
// Slice-level splash conversions.
//
// A device buffer is a row-major BGR image `height` pixels wide and `width`
// rows tall: device row `c` holds display column `c`, bottom pixel first.
// Each device row is channel-shuffled by garb's SIMD row conversions through
// a one-column scratch buffer, which is then scattered into or gathered from
// the RGBA grid.
// ---------------------------------------------------------------------------

use alloc::vec;

use crate::geometry::{PixelLayout, Resolution, Screen};
use crate::SplashError;


// ===========================================================================
// Validation helpers
// ===========================================================================

/// `width × height × bpp` with overflow and zero sizes rejected.
#[inline]
pub(crate) fn expected_len(
    width: usize,
    height: usize,
    layout: PixelLayout,
    len: usize,
) -> Result<usize, SplashError> {
    let mismatch = SplashError::SizeMismatch {
        width,
        height,
        layout,
        len,
    };
    if width == 0 || height == 0 {
        return Err(mismatch);
    }
    Resolution::new(width, height)
        .checked_byte_len(layout)
        .ok_or(mismatch)
}

#[inline]
fn check_exact(
    width: usize,
    height: usize,
    layout: PixelLayout,
    len: usize,
) -> Result<(), SplashError> {
    if expected_len(width, height, layout, len)? != len {
        return Err(SplashError::SizeMismatch {
            width,
            height,
            layout,
            len,
        });
    }
    Ok(())
}

#[inline]
fn check_copy(
    src_len: usize,
    src_layout: PixelLayout,
    dst_len: usize,
    dst_layout: PixelLayout,
    width: usize,
    height: usize,
) -> Result<(), SplashError> {
    check_exact(width, height, src_layout, src_len)?;
    check_exact(width, height, dst_layout, dst_len)
}

#[inline]
pub(crate) fn check_screen(screen: Screen, len: usize) -> Result<(), SplashError> {
    if len != screen.rgba_len() {
        return Err(SplashError::FixedSizeViolation {
            screen,
            expected: screen.rgba_len(),
            actual: len,
        });
    }
    Ok(())
}

// ===========================================================================
// Rotation
// ===========================================================================

/// Which way [`transpose`] moves pixels.
pub(crate) enum Direction<'a> {
    /// Device rows into the RGBA grid.
    Unpack { device: &'a [u8], rgba: &'a mut [u8] },
    /// RGBA grid into device rows.
    Pack { rgba: &'a [u8], device: &'a mut [u8] },
}

/// Byte offset in the RGBA grid of pixel `tx` of device row `column`.
///
/// Display pixel `(x, y)` lives at device pixel `x * height + (height - y - 1)`.
#[inline(always)]
fn rgba_offset(column: usize, tx: usize, width: usize, height: usize) -> usize {
    ((height - tx - 1) * width + column) * 4
}

/// Move every pixel between the device and RGBA layouts of a `width × height`
/// display. Buffer sizes must already be validated.
pub(crate) fn transpose(
    direction: Direction<'_>,
    width: usize,
    height: usize,
) -> Result<(), SplashError> {
    let mut column = vec![0u8; height * 4];
    match direction {
        Direction::Unpack { device, rgba } => {
            for (c, row) in device.chunks_exact(height * 3).enumerate() {
                garb::bytes::bgr_to_rgba(row, &mut column)
                    .map_err(|_| row_error(width, height, device.len()))?;
                for (tx, px) in column.chunks_exact(4).enumerate() {
                    rgba[rgba_offset(c, tx, width, height)..][..4].copy_from_slice(px);
                }
            }
        }
        Direction::Pack { rgba, device } => {
            let device_len = device.len();
            for (c, row) in device.chunks_exact_mut(height * 3).enumerate() {
                for (tx, px) in column.chunks_exact_mut(4).enumerate() {
                    px.copy_from_slice(&rgba[rgba_offset(c, tx, width, height)..][..4]);
                }
                garb::bytes::rgba_to_bgr(&column, row)
                    .map_err(|_| row_error(width, height, device_len))?;
            }
        }
    }
    Ok(())
}

#[cold]
fn row_error(width: usize, height: usize, len: usize) -> SplashError {
    SplashError::SizeMismatch {
        width,
        height,
        layout: PixelLayout::Device,
        len,
    }
}

// ===========================================================================
// Public API
// ===========================================================================

/// Unpack a rotated BGR888 device buffer into row-major RGBA, alpha=255.
///
/// `width` and `height` are the display dimensions. `src` must be exactly
/// `width × height × 3` bytes and `dst` exactly `width × height × 4`.
pub fn device_to_rgba(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), SplashError> {
    check_copy(
        src.len(),
        PixelLayout::Device,
        dst.len(),
        PixelLayout::Rgba,
        width,
        height,
    )?;
    transpose(
        Direction::Unpack {
            device: src,
            rgba: dst,
        },
        width,
        height,
    )
}

/// Pack row-major RGBA into a rotated BGR888 device buffer, dropping alpha.
///
/// Exact inverse of [`device_to_rgba`] for the colour channels.
pub fn rgba_to_device(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), SplashError> {
    check_copy(
        src.len(),
        PixelLayout::Rgba,
        dst.len(),
        PixelLayout::Device,
        width,
        height,
    )?;
    transpose(
        Direction::Pack {
            rgba: src,
            device: dst,
        },
        width,
        height,
    )
}

/// Stack a top and bottom RGBA screen into a 400×480 RGBA canvas.
///
/// `top` must be 384000 bytes, `bottom` 307200 and `dst` 768000. The bottom
/// screen is placed at [`crate::BOTTOM_OFFSET`]; the margins beside it are
/// cleared to zero.
pub fn composite_preview(top: &[u8], bottom: &[u8], dst: &mut [u8]) -> Result<(), SplashError> {
    check_screen(Screen::Top, top.len())?;
    check_screen(Screen::Bottom, bottom.len())?;
    check_exact(
        Resolution::PREVIEW.width,
        Resolution::PREVIEW.height,
        PixelLayout::Rgba,
        dst.len(),
    )?;
    crate::preview::stack(top, bottom, dst);
    Ok(())
}
