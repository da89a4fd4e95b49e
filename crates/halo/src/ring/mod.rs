//! The ring drawable and its shared configuration.
//!
//! Responsibilities:
//! - [`RingState`]: copy-on-write visual configuration shared between
//!   drawable instances
//! - [`RingDrawable`]: per-instance renderer holding the cached drawing
//!   rect, sweep shader, and annulus outline
//! - `geometry`: the pure arc/annulus path construction
//! - `cache`: per-artifact validity tracking with the invalidation edges
//!   declared in one place

mod cache;
mod drawable;
mod geometry;
mod state;

pub use drawable::RingDrawable;
pub use geometry::{build_ring_path, sweep_degrees};
pub use state::{RingState, SharedState};
