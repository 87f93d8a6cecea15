//! Dual-screen preview compositing.

use alloc::vec;

use crate::bitmap::{Bitmap, Frame};
use crate::geometry::{PixelLayout, Resolution, Screen};
use crate::{SplashError, bytes};

/// Pixel position `(x, y)` of the bottom screen's top-left corner on the
/// preview canvas: centred horizontally, directly below the top screen.
pub const BOTTOM_OFFSET: (usize, usize) = (
    (Resolution::TOP.width - Resolution::BOTTOM.width) / 2,
    Resolution::TOP.height,
);

/// Write the full preview canvas. Sizes must already be validated.
pub(crate) fn stack(top: &[u8], bottom: &[u8], dst: &mut [u8]) {
    let (top_area, bottom_area) = dst.split_at_mut(top.len());
    top_area.copy_from_slice(top);

    let canvas_row = Resolution::PREVIEW.width * 4;
    let bottom_row = Resolution::BOTTOM.width * 4;
    let left = BOTTOM_OFFSET.0 * 4;
    for (src, row) in bottom
        .chunks_exact(bottom_row)
        .zip(bottom_area.chunks_exact_mut(canvas_row))
    {
        let (margin, rest) = row.split_at_mut(left);
        let (body, right) = rest.split_at_mut(bottom_row);
        margin.fill(0);
        body.copy_from_slice(src);
        right.fill(0);
    }
}

/// Combine `[top, bottom]` RGBA screens into one 400×480 preview bitmap.
///
/// The top screen fills rows 0..240; the bottom screen covers rows 240..480,
/// columns 40..360. Everything else is zero (transparent black).
///
/// Fails with [`SplashError::InvalidData`] unless exactly two frames with
/// buffers are supplied, and with [`SplashError::FixedSizeViolation`] when a
/// buffer is not the RGBA size of its screen. Declared frame dimensions are
/// not consulted.
pub fn composite_preview(frames: &[Frame<'_>]) -> Result<Bitmap, SplashError> {
    let result = validate(frames).map(|(top, bottom)| {
        let mut canvas = vec![0u8; Resolution::PREVIEW.byte_len(PixelLayout::Rgba)];
        stack(top, bottom, &mut canvas);
        Bitmap::new_unchecked(canvas, Resolution::PREVIEW, PixelLayout::Rgba)
    });
    match &result {
        Ok(_) => {
            debug!("composited {} preview", Resolution::PREVIEW);
        }
        Err(e) => {
            debug!("preview rejected: {}", e);
        }
    }
    result
}

fn validate<'a>(frames: &[Frame<'a>]) -> Result<(&'a [u8], &'a [u8]), SplashError> {
    let [top, bottom] = frames else {
        return Err(SplashError::InvalidData);
    };
    let top = top.data.ok_or(SplashError::InvalidData)?;
    let bottom = bottom.data.ok_or(SplashError::InvalidData)?;
    bytes::check_screen(Screen::Top, top.len())?;
    bytes::check_screen(Screen::Bottom, bottom.len())?;
    Ok((top, bottom))
}
