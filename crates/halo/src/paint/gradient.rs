use crate::coords::{Transform2, Vec2};

use super::Argb;

/// Angular (sweep) gradient description.
///
/// Semantics:
/// - Colors ramp by angle around `center`, starting at the +X axis and
///   turning clockwise on screen.
/// - `positions`, when present, place each color at a fraction of the full
///   turn; `None` distributes colors evenly. The ring drawable always passes
///   `None`.
/// - `local_transform` is applied to gradient space before sampling; the
///   drawable uses it to flip and rotate the ramp so its zero reference
///   lines up with the ring's starting angle.
///
/// Caller contract: two or more colors for a meaningful ramp. Shorter lists
/// are passed through untouched and render however the host's gradient
/// primitive degenerates.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGradient {
    pub center: Vec2,
    pub colors: Vec<Argb>,
    pub positions: Option<Vec<f32>>,
    pub local_transform: Transform2,
}

impl SweepGradient {
    pub fn new(center: Vec2, colors: Vec<Argb>, positions: Option<Vec<f32>>) -> Self {
        Self {
            center,
            colors,
            positions,
            local_transform: Transform2::identity(),
        }
    }

    #[inline]
    pub fn with_local_transform(mut self, transform: Transform2) -> Self {
        self.local_transform = transform;
        self
    }

    /// Returns true when the definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.colors.len() >= 2
            && self
                .positions
                .as_ref()
                .is_none_or(|p| p.len() == self.colors.len() && p.iter().all(|t| t.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_colors_no_positions_is_valid() {
        let g = SweepGradient::new(
            Vec2::new(50.0, 50.0),
            vec![Argb::new(0xFFFF0000), Argb::new(0xFF0000FF)],
            None,
        );
        assert!(g.is_valid());
    }

    #[test]
    fn single_color_is_degenerate() {
        let g = SweepGradient::new(Vec2::zero(), vec![Argb::BLACK], None);
        assert!(!g.is_valid());
    }

    #[test]
    fn mismatched_positions_are_invalid() {
        let g = SweepGradient::new(
            Vec2::zero(),
            vec![Argb::BLACK, Argb::TRANSPARENT],
            Some(vec![0.0]),
        );
        assert!(!g.is_valid());
    }
}
