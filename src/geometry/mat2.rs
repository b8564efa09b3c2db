use crate::geometry::tolerance::{near_zero, EPS_DENOM};
use crate::model::Scalar;

/// Row-major 2x2 matrix. The deformation math is intrinsically planar, so
/// this is the only dense linear algebra the crate carries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat2 {
    pub a: Scalar,
    pub b: Scalar,
    pub c: Scalar,
    pub d: Scalar,
}

impl Mat2 {
    pub const ZERO: Mat2 = Mat2 {
        a: 0.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
    };

    #[inline]
    pub fn new(a: Scalar, b: Scalar, c: Scalar, d: Scalar) -> Self {
        Mat2 { a, b, c, d }
    }

    #[inline]
    pub fn det(&self) -> Scalar {
        self.a * self.d - self.b * self.c
    }

    #[inline]
    pub fn transpose(&self) -> Mat2 {
        Mat2::new(self.a, self.c, self.b, self.d)
    }

    /// None when the determinant is numerically zero or non-finite.
    pub fn inverse(&self) -> Option<Mat2> {
        let det = self.det();
        if !det.is_finite() || near_zero(det, EPS_DENOM) {
            return None;
        }
        let inv = 1.0 / det;
        Some(Mat2::new(
            self.d * inv,
            -self.b * inv,
            -self.c * inv,
            self.a * inv,
        ))
    }

    pub fn mul(&self, o: &Mat2) -> Mat2 {
        Mat2::new(
            self.a * o.a + self.b * o.c,
            self.a * o.b + self.b * o.d,
            self.c * o.a + self.d * o.c,
            self.c * o.b + self.d * o.d,
        )
    }

    #[inline]
    pub fn scaled(&self, s: Scalar) -> Mat2 {
        Mat2::new(self.a * s, self.b * s, self.c * s, self.d * s)
    }

    /// Row vector times matrix: [x y] * M.
    #[inline]
    pub fn row_mul(&self, x: Scalar, y: Scalar) -> (Scalar, Scalar) {
        (x * self.a + y * self.c, x * self.b + y * self.d)
    }
}
