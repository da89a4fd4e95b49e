//! Coordinate and geometry types shared with the host backend.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//! - Angles in degrees, positive clockwise on screen

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Transform2;
pub use vec2::Vec2;
