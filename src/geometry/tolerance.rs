// Centralized tolerances and helpers for robust deformation math

use crate::model::Scalar;

pub const EPS_LEN: Scalar = 1e-9; // zero-length vector threshold
pub const EPS_DENOM: Scalar = 1e-12; // determinant/denominator guard
pub const EPS_REL: Scalar = 1e-9; // relative compare slack for tests/invariants

#[inline]
pub fn near_zero(x: Scalar, eps: Scalar) -> bool {
    x.abs() <= eps
}

#[inline]
pub fn norm2(x: Scalar, y: Scalar) -> Scalar {
    (x * x + y * y).sqrt()
}
