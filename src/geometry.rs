use core::fmt;

/// Byte layout of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Packed B, G, R in the rotated device scan order.
    Device,
    /// Row-major R, G, B, A.
    Rgba,
}

impl PixelLayout {
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelLayout::Device => 3,
            PixelLayout::Rgba => 4,
        }
    }
}

impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PixelLayout::Device => "BGR888",
            PixelLayout::Rgba => "RGBA",
        })
    }
}

/// Display dimensions in pixels, as the panel shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    /// The top screen.
    pub const TOP: Resolution = Resolution::new(400, 240);
    /// The bottom screen.
    pub const BOTTOM: Resolution = Resolution::new(320, 240);
    /// Both screens stacked, bottom centred under top.
    pub const PREVIEW: Resolution = Resolution::new(
        Resolution::TOP.width,
        Resolution::TOP.height + Resolution::BOTTOM.height,
    );

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// # Panics
    ///
    /// On overflow in debug builds. Use [`checked_pixel_count`](Self::checked_pixel_count)
    /// for untrusted dimensions.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Buffer length for this resolution in `layout`.
    ///
    /// # Panics
    ///
    /// On overflow in debug builds. Use [`checked_byte_len`](Self::checked_byte_len)
    /// for untrusted dimensions.
    #[inline]
    pub const fn byte_len(&self, layout: PixelLayout) -> usize {
        self.pixel_count() * layout.bytes_per_pixel()
    }

    /// `width × height`, or `None` on overflow.
    #[inline]
    pub const fn checked_pixel_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Buffer length in `layout`, or `None` on overflow.
    #[inline]
    pub const fn checked_byte_len(&self, layout: PixelLayout) -> Option<usize> {
        match self.checked_pixel_count() {
            Some(px) => px.checked_mul(layout.bytes_per_pixel()),
            None => None,
        }
    }

    /// The screen with exactly this resolution, if any.
    pub fn screen(&self) -> Option<Screen> {
        [Screen::Top, Screen::Bottom]
            .into_iter()
            .find(|s| s.resolution() == *self)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One of the two framebuffers of the handheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Top,
    Bottom,
}

impl Screen {
    pub const fn resolution(self) -> Resolution {
        match self {
            Screen::Top => Resolution::TOP,
            Screen::Bottom => Resolution::BOTTOM,
        }
    }

    /// Length of a splash file for this screen (288000 / 230400).
    pub const fn device_len(self) -> usize {
        self.resolution().byte_len(PixelLayout::Device)
    }

    /// Length of the unpacked RGBA buffer for this screen (384000 / 307200).
    pub const fn rgba_len(self) -> usize {
        self.resolution().byte_len(PixelLayout::Rgba)
    }

    /// The screen whose splash file is exactly `len` bytes long.
    pub const fn from_device_len(len: usize) -> Option<Screen> {
        if len == Screen::Top.device_len() {
            Some(Screen::Top)
        } else if len == Screen::Bottom.device_len() {
            Some(Screen::Bottom)
        } else {
            None
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Screen::Top => "Top",
            Screen::Bottom => "Bottom",
        })
    }
}

/// Resolution of a device-format buffer of `len` bytes.
///
/// Only the two splash sizes are recognized; anything else is `None`.
pub const fn infer_resolution(len: usize) -> Option<Resolution> {
    match Screen::from_device_len(len) {
        Some(screen) => Some(screen.resolution()),
        None => None,
    }
}
