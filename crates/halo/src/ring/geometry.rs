//! Annulus outline construction.
//!
//! Pure geometry: given a drawing rect, thickness ratio, starting angle, and
//! sweep, emit the path verbs for either a partial "pie slice of a ring"
//! contour or the full two-contour annulus. No caching here; the drawable
//! owns that.

use crate::coords::{Rect, Vec2};
use crate::path::{Direction, FillRule, Path};

/// Angular extent of the visible arc, in degrees.
///
/// `level` runs 0–10000 (the host's progress convention); when `use_level`
/// is false the ring is always a full circle.
#[inline]
pub fn sweep_degrees(use_level: bool, level: u32) -> f32 {
    if use_level {
        360.0 * level as f32 / 10000.0
    } else {
        360.0
    }
}

/// Rebuilds `path` as the ring outline for `bounds`.
///
/// Radii derive from the rect width: thickness = width / `thickness_ratio`,
/// inner radius = width/2 − thickness. The inner bounds rect is the
/// concentric square sized to the inner circle, so the construction
/// generalizes to non-square rects.
///
/// `starting_angle` is measured in degrees clockwise from the +X axis in
/// screen coordinates (+Y down); the direction to the arc's start point is
/// `(cos θ, −sin θ)`.
///
/// A `sweep` of 0 produces a degenerate zero-area sliver (two coincident
/// radial edges), never a full circle; |sweep| ≥ 360 produces the
/// two-contour annulus since arcs treat their sweep modulo 360.
pub fn build_ring_path(
    path: &mut Path,
    bounds: Rect,
    thickness_ratio: f32,
    starting_angle: f32,
    sweep: f32,
) {
    debug_assert!(
        thickness_ratio > 0.0,
        "thickness_ratio must be positive, got {thickness_ratio}"
    );

    path.reset();

    let center = bounds.center();
    let thickness = bounds.width() / thickness_ratio;
    let inner_radius = bounds.width() / 2.0 - thickness;

    let inner_bounds = bounds.inset(
        bounds.width() / 2.0 - inner_radius,
        bounds.height() / 2.0 - inner_radius,
    );
    let outer_bounds = inner_bounds.inset(-thickness, -thickness);

    if sweep.abs() < 360.0 {
        // Single closed contour: inner start point, out along the radius,
        // around the outer edge, back along the inner edge. Even-odd fill
        // renders the hole without boolean subtraction.
        path.set_fill_rule(FillRule::EvenOdd);

        let (sin, cos) = starting_angle.to_radians().sin_cos();
        let dir = Vec2::new(cos, -sin);

        path.move_to(center + dir * inner_radius);
        path.line_to(center + dir * (inner_radius + thickness));
        path.arc_to(outer_bounds, -starting_angle, -sweep);
        path.arc_to(inner_bounds, -starting_angle - sweep, sweep);
        path.close();
    } else {
        // Full ring: opposite winding directions cut the hole under either
        // fill rule.
        path.add_oval(outer_bounds, Direction::Cw);
        path.add_oval(inner_bounds, Direction::Ccw);
    }
}
