use crate::algorithms::precompute::Coefficients;
use crate::geometry::tolerance::{norm2, EPS_LEN};
use crate::geometry::weights::weighted_mean;
use crate::model::{DeformError, Point, Scalar};

/// Remaps every vertex as an unconstrained linear blend of the deformed,
/// centered control positions. May shear and scale non-uniformly.
pub fn update_affine(co: &Coefficients, deformed: &[Point], curve: &mut [Point]) {
    for (v, out) in curve.iter_mut().enumerate() {
        let row = &co.weights[v];
        let star = weighted_mean(row, deformed);
        let mut nx = 0.0;
        let mut ny = 0.0;
        for (a, q) in co.affine[v].iter().zip(deformed) {
            nx += (q.x - star.x) * *a;
            ny += (q.y - star.y) * *a;
        }
        *out = Point {
            x: nx + star.x,
            y: ny + star.y,
        };
    }
}

/// Remaps every vertex under a rotation + uniform scale fit (no shear).
pub fn update_similarity(co: &Coefficients, deformed: &[Point], curve: &mut [Point]) {
    for (v, out) in curve.iter_mut().enumerate() {
        let star = weighted_mean(&co.weights[v], deformed);
        let (nx, ny) = similarity_sum(co, v, deformed, star);
        *out = Point {
            x: nx + star.x,
            y: ny + star.y,
        };
    }
}

/// Computes the rigid (rotation + translation only) positions for the whole
/// curve. Returns the new buffer instead of writing in place so a failed
/// vertex leaves the live curve untouched.
pub fn rigid_positions(co: &Coefficients, deformed: &[Point]) -> Result<Vec<Point>, DeformError> {
    let n = co.weights.len();
    let mut out = Vec::with_capacity(n);
    for v in 0..n {
        let star = weighted_mean(&co.weights[v], deformed);
        let (rx, ry) = similarity_sum(co, v, deformed, star);
        let len = norm2(rx, ry);
        if len <= EPS_LEN {
            return Err(DeformError::ZeroLengthVector { vertex: v });
        }
        // Rescale the similarity fit back to the original offset magnitude,
        // stripping its residual uniform scale.
        let scale = norm2(co.baseline[v].x, co.baseline[v].y) / len;
        out.push(Point {
            x: rx * scale + star.x,
            y: ry * scale + star.y,
        });
    }
    Ok(out)
}

/// sum_j q_hat_j * As[v][j], the shared similarity/rigid accumulation.
fn similarity_sum(co: &Coefficients, v: usize, deformed: &[Point], star: Point) -> (Scalar, Scalar) {
    let mut nx = 0.0;
    let mut ny = 0.0;
    for (m, q) in co.similarity[v].iter().zip(deformed) {
        let (px, py) = m.row_mul(q.x - star.x, q.y - star.y);
        nx += px;
        ny += py;
    }
    (nx, ny)
}
