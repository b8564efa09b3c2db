use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coordinate scalar. Double precision by default, matching the reference
/// deformation math; the `f32` feature switches the whole crate to single
/// precision.
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;
#[cfg(feature = "f32")]
pub type Scalar = f32;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Scalar,
    pub y: Scalar,
}

impl Point {
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Point { x, y }
    }
}

/// Which transformation class an update constrains each vertex
/// neighborhood to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Affine = 0,
    Similarity = 1,
    Rigid = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightKind {
    /// 1/distance^3 falloff from each control point (default).
    InverseCubicDist,
    /// 1/(index distance)^2 along the curve, ignoring geometry.
    GeodesicIndex,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WeightConfig {
    pub kind: WeightKind,
    /// Falloff values below this threshold clamp to weight 1.0. Expressed
    /// in the curve's own coordinate units; rescale the curve or this
    /// threshold together.
    pub clamp: Scalar,
}

impl Default for WeightConfig {
    fn default() -> Self {
        WeightConfig {
            kind: WeightKind::InverseCubicDist,
            clamp: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DeformError {
    #[error("control index {index} out of range for curve of {len} points")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("duplicate control index {index}")]
    DuplicateControlIndex { index: usize },
    #[error("control index set is empty")]
    EmptyControlSet,
    #[error("weight clamp must be positive and finite")]
    InvalidWeightClamp,
    #[error("degenerate control set: singular covariance at vertex {vertex}")]
    DegenerateControlSet { vertex: usize },
    #[error("zero-length accumulated vector at vertex {vertex}")]
    ZeroLengthVector { vertex: usize },
}
