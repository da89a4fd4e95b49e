/// Packed ARGB color (`0xAARRGGBB`), straight alpha.
///
/// Integer-packed rather than float so that alpha modulation composites
/// bit-identically across hosts; conversion to a backend's float/premul
/// representation happens on the host side.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0);
    pub const BLACK: Argb = Argb(0xFF00_0000);

    #[inline]
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns the color with its alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Argb((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// A color carrying only an alpha channel (RGB zero).
    #[inline]
    pub const fn alpha_only(alpha: u8) -> Self {
        Argb((alpha as u32) << 24)
    }
}

/// Scales `alpha` by `scale` using the 8-bit fixed-point multiply
/// `alpha * (scale + (scale >> 7)) >> 8`.
///
/// The `scale >> 7` correction makes 255 act as exactly 1.0 (so
/// `modulate_alpha(x, 255) == x`), matching the integer rounding of the usual
/// 2D paint pipelines.
#[inline]
pub fn modulate_alpha(alpha: u8, scale: u8) -> u8 {
    let scale = scale as u32 + ((scale as u32) >> 7);
    ((alpha as u32 * scale) >> 8) as u8
}
