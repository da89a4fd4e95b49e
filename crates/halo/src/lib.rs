//! Halo: a circular ("ring") progress drawable.
//!
//! This crate builds the geometry and paint description for an annular
//! progress indicator and hands it to a host 2D backend for rasterization.
//! It owns the cache-invalidation policy (drawing rectangle, sweep-gradient
//! shader, ring outline path) so redraws only recompute what actually
//! changed.
//!
//! Rasterization, antialiasing, gradient interpolation, animation timing and
//! layout are host concerns, reached through the traits in [`host`].

pub mod logging;

pub mod coords;
pub mod host;
pub mod paint;
pub mod path;
pub mod ring;
