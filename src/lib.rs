//! # splashbin
//!
//! Pixel layout conversions for dual-screen splash framebuffers.
//!
//! Splash files store each screen as packed BGR888, 3 bytes per pixel, in a
//! scan order rotated 90° from how the panel displays it. This crate unpacks
//! those buffers into ordinary row-major RGBA, packs RGBA back into the device
//! layout, and stacks a top and bottom screen into one 400×480 preview.
//!
//! ```rust
//! use splashbin::{Frame, device_to_rgba, rgba_to_device};
//!
//! let splash = vec![0u8; 288_000];
//! let rgba = device_to_rgba(Frame::new(&splash)).unwrap();
//! assert_eq!((rgba.width(), rgba.height()), (400, 240));
//!
//! let packed = rgba_to_device(rgba.as_frame()).unwrap();
//! assert_eq!(packed.data(), &splash[..]);
//! ```
//!
//! ## Layers
//!
//! - Crate root: allocating operations on [`Frame`] inputs that return owned
//!   [`Bitmap`]s.
//! - [`bytes`]: the same transforms on caller-owned `&[u8]` / `&mut [u8]`
//!   buffers. The per-row channel shuffles go through [`garb`], which is
//!   SIMD-accelerated (AVX2, WASM SIMD128) with a scalar fallback.
//!
//! ## Feature flags
//!
//! - **`rgb`**: typed pixel views using [`rgb`] crate types via bytemuck.
//! - **`imgref`**: whole-image conversions using `imgref` types. Implies `rgb`.
//! - **`png`**: `image::RgbaImage` output and PNG encode/decode through the
//!   `image` crate. Implies `std`.
//! - **`log`**: debug diagnostics through the `log` facade.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

use core::fmt;

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "log"))]
        {
            let _ = format_args!($($arg)*);
        }
    };
}

mod bitmap;
pub mod bytes;
mod convert;
mod geometry;
mod preview;

pub use bitmap::{Bitmap, Frame};
pub use convert::{device_to_rgba, rgba_to_device};
pub use geometry::{PixelLayout, Resolution, Screen, infer_resolution};
pub use preview::{BOTTOM_OFFSET, composite_preview};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;

#[cfg(feature = "png")]
pub mod png;

/// Reasons a conversion was refused.
///
/// Every variant is terminal for the call: no output buffer is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashError {
    /// No dimensions were given and the buffer length matches neither screen.
    ResolutionUndeterminable { len: usize },
    /// `width × height × bytes_per_pixel` disagrees with the buffer length.
    SizeMismatch {
        width: usize,
        height: usize,
        layout: PixelLayout,
        len: usize,
    },
    /// A buffer was missing, or the compositor did not get exactly two frames.
    InvalidData,
    /// A zero-length buffer where pixels are required.
    EmptyData,
    /// A compositor input is not the exact RGBA size of its screen.
    FixedSizeViolation {
        screen: Screen,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for SplashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SplashError::ResolutionUndeterminable { len } => {
                write!(f, "Unable to determine resolution ({len} bytes).")
            }
            SplashError::SizeMismatch {
                width,
                height,
                layout,
                len,
            } => write!(
                f,
                "Incorrect data size for the resolution given ({width}x{height} {layout} needs {} bytes, got {len}).",
                width
                    .saturating_mul(height)
                    .saturating_mul(layout.bytes_per_pixel())
            ),
            SplashError::InvalidData => f.write_str("Invalid data."),
            SplashError::EmptyData => f.write_str("No data."),
            SplashError::FixedSizeViolation {
                screen,
                expected,
                actual,
            } => write!(
                f,
                "{screen} screen splash buffer is an invalid size (expected {expected} bytes, got {actual})."
            ),
        }
    }
}

impl core::error::Error for SplashError {}
