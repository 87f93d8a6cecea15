use alloc::vec::Vec;

use crate::bytes::expected_len;
use crate::geometry::{PixelLayout, Resolution};
use crate::SplashError;

/// Borrowed input as a loader hands it over: any part may be missing.
///
/// A dimension of `Some(0)` is treated the same as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame<'a> {
    pub data: Option<&'a [u8]>,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl<'a> Frame<'a> {
    /// A buffer without dimensions.
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data: Some(data),
            width: None,
            height: None,
        }
    }

    pub const fn with_size(data: &'a [u8], width: usize, height: usize) -> Self {
        Self {
            data: Some(data),
            width: Some(width),
            height: Some(height),
        }
    }

    /// A frame with no buffer at all.
    pub const fn missing() -> Self {
        Self {
            data: None,
            width: None,
            height: None,
        }
    }

    /// Declared dimensions, if both are present and non-zero.
    pub fn resolution(&self) -> Option<Resolution> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w != 0 && h != 0 => Some(Resolution::new(w, h)),
            _ => None,
        }
    }
}

/// An owned pixel buffer whose length always matches its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    data: Vec<u8>,
    resolution: Resolution,
    layout: PixelLayout,
}

impl Bitmap {
    /// Callers guarantee `data.len() == resolution.byte_len(layout)`.
    pub(crate) fn new_unchecked(data: Vec<u8>, resolution: Resolution, layout: PixelLayout) -> Self {
        debug_assert_eq!(data.len(), resolution.byte_len(layout));
        Self {
            data,
            resolution,
            layout,
        }
    }

    fn checked(
        data: Vec<u8>,
        width: usize,
        height: usize,
        layout: PixelLayout,
    ) -> Result<Self, SplashError> {
        let len = data.len();
        if expected_len(width, height, layout, len)? != len {
            return Err(SplashError::SizeMismatch {
                width,
                height,
                layout,
                len,
            });
        }
        Ok(Self::new_unchecked(
            data,
            Resolution::new(width, height),
            layout,
        ))
    }

    /// Wrap an RGBA buffer of `width × height × 4` bytes.
    pub fn from_rgba(data: Vec<u8>, width: usize, height: usize) -> Result<Self, SplashError> {
        Self::checked(data, width, height, PixelLayout::Rgba)
    }

    /// Wrap a device buffer of `width × height × 3` bytes.
    pub fn from_device(data: Vec<u8>, width: usize, height: usize) -> Result<Self, SplashError> {
        Self::checked(data, width, height, PixelLayout::Device)
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.resolution.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.resolution.height
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as input for another conversion.
    pub fn as_frame(&self) -> Frame<'_> {
        Frame::with_size(&self.data, self.width(), self.height())
    }
}

impl AsRef<[u8]> for Bitmap {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<'a> From<&'a Bitmap> for Frame<'a> {
    fn from(bitmap: &'a Bitmap) -> Self {
        bitmap.as_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn zero_dimension_is_missing() {
        let data = [0u8; 3];
        assert_eq!(Frame::with_size(&data, 0, 1).resolution(), None);
        assert_eq!(Frame::with_size(&data, 1, 0).resolution(), None);
        assert_eq!(Frame::new(&data).resolution(), None);
        assert_eq!(
            Frame::with_size(&data, 1, 1).resolution(),
            Some(Resolution::new(1, 1))
        );
    }

    #[test]
    fn checked_constructors() {
        let bmp = Bitmap::from_rgba(vec![0; 24], 3, 2).unwrap();
        assert_eq!((bmp.width(), bmp.height()), (3, 2));
        assert_eq!(bmp.layout(), PixelLayout::Rgba);
        assert!(Bitmap::from_device(vec![0; 18], 3, 2).is_ok());
        assert_eq!(
            Bitmap::from_device(vec![0; 24], 3, 2),
            Err(SplashError::SizeMismatch {
                width: 3,
                height: 2,
                layout: PixelLayout::Device,
                len: 24,
            })
        );
        assert!(Bitmap::from_rgba(vec![], 0, 0).is_err());
    }

    #[test]
    fn frame_round_trips_dimensions() {
        let bmp = Bitmap::from_rgba(vec![7; 8], 2, 1).unwrap();
        let frame = Frame::from(&bmp);
        assert_eq!(frame.data, Some(&[7u8; 8][..]));
        assert_eq!(frame.resolution(), Some(Resolution::new(2, 1)));
    }
}
