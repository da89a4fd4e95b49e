//! Host-side collaborator interfaces.
//!
//! The drawable never touches a real canvas, scheduler, or resource table;
//! it talks to the host through these traits. Keeping them object-safe lets
//! hosts hand in `&mut dyn Canvas` per frame without generics leaking into
//! the drawable's type.

use crate::paint::{Argb, FillPaint};
use crate::path::Path;

/// Drawing surface the host exposes for one draw pass.
pub trait Canvas {
    /// Fills `path` with `paint`. Arc flattening, antialiasing, and gradient
    /// sampling are the implementor's business.
    fn draw_path(&mut self, path: &Path, paint: &FillPaint);
}

/// Receives invalidation notifications.
///
/// The drawable calls [`request_redraw`](RedrawSink::request_redraw) whenever
/// cached visual state goes stale; the host schedules a repaint in response.
pub trait RedrawSink {
    fn request_redraw(&self);
}

/// Something the host can draw and size.
///
/// Stands in for a framework drawable base class: draw into a canvas, report
/// preferred size (−1 means unspecified).
pub trait Renderable {
    fn draw(&mut self, canvas: &mut dyn Canvas);
    fn intrinsic_width(&self) -> i32;
    fn intrinsic_height(&self) -> i32;
}

/// Configuration value that can be duplicated for copy-on-write sharing and
/// compared for divergence.
pub trait ShareableConfig: Clone + PartialEq {}

/// Opaque identifier for a host-managed color resource.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ResourceId(pub u32);

/// Maps resource identifiers to concrete ARGB values.
///
/// Purely a lookup table; lives entirely on the host side.
pub trait ColorResolver {
    fn color(&self, id: ResourceId) -> Argb;
}
