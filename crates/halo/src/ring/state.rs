use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::Rect;
use crate::host::ShareableConfig;
use crate::paint::Argb;

/// Handle to a [`RingState`] shared between drawable instances.
///
/// Mutating a shared state is visible to every sharer immediately; callers
/// that want isolation must go through
/// [`RingDrawable::divest`](crate::ring::RingDrawable::divest) first.
/// Single-threaded by construction (`Rc` is not `Send`).
pub type SharedState = Rc<RefCell<RingState>>;

/// Visual configuration of a ring drawable.
///
/// A plain value type: cloning deep-copies the color list and padding, so a
/// clone diverges freely from its source.
#[derive(Debug, Clone, PartialEq)]
pub struct RingState {
    colors: Option<Vec<Argb>>,
    has_solid_color: bool,
    solid_color: Argb,
    /// Ring thickness = rect width / ratio. Must be > 0.
    pub thickness_ratio: f32,
    /// When false the ring is always a full circle regardless of level.
    pub use_level: bool,
    /// Fractional gradient center within the drawing rect, 0–1 per axis.
    pub center_x: f32,
    pub center_y: f32,
    /// Intrinsic size in logical pixels; −1 means unspecified.
    pub width: i32,
    pub height: i32,
    pub padding: Option<Rect>,
}

impl RingState {
    pub fn new() -> Self {
        Self {
            colors: None,
            has_solid_color: false,
            solid_color: Argb::TRANSPARENT,
            thickness_ratio: 8.0,
            use_level: true,
            center_x: 0.5,
            center_y: 0.5,
            width: -1,
            height: -1,
            padding: None,
        }
    }

    /// Wraps a fresh default state in a shareable handle.
    pub fn new_shared() -> SharedState {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Replaces the gradient color list and leaves solid-color mode.
    ///
    /// Caller contract: two or more colors for a meaningful gradient. Shorter
    /// lists are stored as-is and degenerate at the host's gradient
    /// primitive, not here.
    pub fn set_colors(&mut self, colors: Vec<Argb>) {
        self.has_solid_color = false;
        self.colors = Some(colors);
    }

    /// Switches to a single fill color, discarding any gradient colors.
    pub fn set_solid_color(&mut self, argb: Argb) {
        self.has_solid_color = true;
        self.solid_color = argb;
        self.colors = None;
    }

    #[inline]
    pub fn colors(&self) -> Option<&[Argb]> {
        self.colors.as_deref()
    }

    #[inline]
    pub fn has_solid_color(&self) -> bool {
        self.has_solid_color
    }

    #[inline]
    pub fn solid_color(&self) -> Argb {
        self.solid_color
    }
}

impl Default for RingState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareableConfig for RingState {}
