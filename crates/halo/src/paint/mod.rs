//! Paint model handed to the host backend.
//!
//! Scope:
//! - ARGB color representation and integer alpha modulation
//! - sweep-gradient shader description
//! - the per-draw fill paint bundle
//!
//! Nothing here samples or blends pixels; these are value descriptions the
//! host rasterizer consumes. Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Argb, modulate_alpha};
pub use gradient::SweepGradient;

/// Opaque post-processing filter handle.
///
/// The drawable never interprets this; it is carried through to the host
/// paint unchanged. Hosts map the id to whatever color-filter object their
/// backend uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ColorFilter(pub u64);

/// Fill configuration for a single draw call.
///
/// Built fresh inside every `draw`, so no paint state leaks between frames.
/// When `shader` is present the host samples it instead of `color`; `color`'s
/// alpha channel still participates in compositing against an attached
/// [`ColorFilter`].
#[derive(Debug, Clone, PartialEq)]
pub struct FillPaint {
    pub color: Argb,
    pub shader: Option<SweepGradient>,
    pub color_filter: Option<ColorFilter>,
}

impl FillPaint {
    #[inline]
    pub fn solid(color: Argb) -> Self {
        Self { color, shader: None, color_filter: None }
    }
}
