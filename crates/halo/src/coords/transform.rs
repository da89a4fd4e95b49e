use super::Vec2;

/// 2D affine transform (2×3 matrix).
///
/// Maps `p` to `(a·x + c·y + tx, b·x + d·y + ty)`. Positive rotation angles
/// turn clockwise on screen (+Y down), matching the angle convention used by
/// the ring geometry.
///
/// `post_*` methods compose on the left: the new operation is applied *after*
/// the existing transform, which is how shader local matrices are built up
/// (flip, then translate, then rotate).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform2 {
    #[inline]
    pub const fn identity() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self { a: sx, b: 0.0, c: 0.0, d: sy, tx: 0.0, ty: 0.0 }
    }

    /// Mirrors across the x-axis (`y → −y`).
    #[inline]
    pub const fn flip_y() -> Self {
        Self::scale(1.0, -1.0)
    }

    #[inline]
    pub fn post_translate(mut self, dx: f32, dy: f32) -> Self {
        self.tx += dx;
        self.ty += dy;
        self
    }

    /// Rotates by `degrees` (clockwise on screen) about the origin, applied
    /// after the existing transform.
    pub fn post_rotate(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: cos * self.a - sin * self.b,
            b: sin * self.a + cos * self.b,
            c: cos * self.c - sin * self.d,
            d: sin * self.c + cos * self.d,
            tx: cos * self.tx - sin * self.ty,
            ty: sin * self.tx + cos * self.ty,
        }
    }

    /// Rotates by `degrees` about `pivot`, applied after the existing
    /// transform.
    pub fn post_rotate_about(self, degrees: f32, pivot: Vec2) -> Self {
        self.post_translate(-pivot.x, -pivot.y)
            .post_rotate(degrees)
            .post_translate(pivot.x, pivot.y)
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}
