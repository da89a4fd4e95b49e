//! Retained path model.
//!
//! A [`Path`] is a recorded sequence of verbs plus a fill rule; the host
//! backend flattens arcs and rasterizes. Keeping paths as verbs (instead of
//! pre-flattened polylines) lets the host pick its own arc tolerance and
//! lets tests assert on structure.

use crate::coords::{Rect, Vec2};

/// Contour winding direction for whole-oval verbs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Cw,
    Ccw,
}

/// Rule deciding which regions of a multi-contour path are filled.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

/// A single path segment.
///
/// Arc angles are degrees, measured from the +X axis, positive clockwise on
/// screen (+Y down). `ArcTo` appends the arc of the ellipse inscribed in
/// `oval`, connecting to the current point with a line if one exists.
#[derive(Debug, Clone, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    ArcTo {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
    },
    Oval {
        bounds: Rect,
        dir: Direction,
    },
    Close,
}

/// Recorded fill outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
    fill_rule: FillRule,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self {
            verbs: Vec::new(),
            fill_rule: FillRule::NonZero,
        }
    }

    /// Clears verbs and resets the fill rule, keeping allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.verbs.clear();
        self.fill_rule = FillRule::NonZero;
    }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    #[inline]
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    #[inline]
    pub fn set_fill_rule(&mut self, rule: FillRule) {
        self.fill_rule = rule;
    }

    #[inline]
    pub fn move_to(&mut self, p: Vec2) {
        self.verbs.push(PathVerb::MoveTo(p));
    }

    #[inline]
    pub fn line_to(&mut self, p: Vec2) {
        self.verbs.push(PathVerb::LineTo(p));
    }

    #[inline]
    pub fn arc_to(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32) {
        self.verbs.push(PathVerb::ArcTo { oval, start_angle, sweep_angle });
    }

    /// Appends a whole ellipse as its own closed contour.
    #[inline]
    pub fn add_oval(&mut self, bounds: Rect, dir: Direction) {
        self.verbs.push(PathVerb::Oval { bounds, dir });
    }

    #[inline]
    pub fn close(&mut self) {
        self.verbs.push(PathVerb::Close);
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}
