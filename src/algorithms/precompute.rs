use crate::geometry::mat2::Mat2;
use crate::geometry::weights::{compute_weights, weighted_mean, WeightTable};
use crate::model::{DeformError, Point, Scalar, WeightConfig};

/// Per-vertex coefficient tables derived from the original curve and the
/// chosen control set. Built once per `init`; read-only for every
/// subsequent update.
#[derive(Clone, Debug, Default)]
pub struct Coefficients {
    /// N x M falloff weights.
    pub weights: WeightTable,
    /// N x M scalar blending coefficients for the affine update.
    pub affine: Vec<Vec<Scalar>>,
    /// N x M rotation-encoding matrices for the similarity/rigid updates.
    pub similarity: Vec<Vec<Mat2>>,
    /// Per-vertex original offset from the weighted control mean; the rigid
    /// update rescales its result to this magnitude.
    pub baseline: Vec<Point>,
}

/// Builds every coefficient table for `curve` and the control points at
/// `control_idx`. O(N*M). Indices must be validated by the caller.
pub fn build(
    curve: &[Point],
    control_idx: &[usize],
    cfg: &WeightConfig,
) -> Result<Coefficients, DeformError> {
    let controls: Vec<Point> = control_idx.iter().map(|&i| curve[i]).collect();
    let weights = compute_weights(curve, &controls, control_idx, cfg);
    let m = controls.len();

    let mut affine = Vec::with_capacity(curve.len());
    let mut similarity = Vec::with_capacity(curve.len());
    let mut baseline = Vec::with_capacity(curve.len());

    for (v, vert) in curve.iter().enumerate() {
        let row = &weights[v];
        let star = weighted_mean(row, &controls);
        let mut hat = Vec::with_capacity(m);
        for p in &controls {
            hat.push(Point {
                x: p.x - star.x,
                y: p.y - star.y,
            });
        }
        // Original vertex offset from the weighted control mean.
        let e = Point {
            x: vert.x - star.x,
            y: vert.y - star.y,
        };

        // Affine: invert the weighted covariance of the centered controls.
        // It does not depend on the inner control index, so one inverse per
        // vertex serves the whole row.
        let mut cov = Mat2::ZERO;
        for (w, h) in row.iter().zip(&hat) {
            cov.a += h.x * h.x * *w;
            cov.b += h.x * h.y * *w;
            cov.d += h.y * h.y * *w;
        }
        cov.c = cov.b;
        let inv = cov
            .inverse()
            .ok_or(DeformError::DegenerateControlSet { vertex: v })?;
        // (v - p*)^t . C^-1, shared across the row.
        let (ex, ey) = inv.row_mul(e.x, e.y);
        let mut a_row = Vec::with_capacity(m);
        for (w, h) in row.iter().zip(&hat) {
            a_row.push((ex * h.x + ey * h.y) * *w);
        }

        // Similarity: normalizer mu = sum_i w_i ||p_hat_i||^2. Positive
        // whenever the covariance above is invertible (mu is its trace).
        let mut mu = 0.0;
        for (w, h) in row.iter().zip(&hat) {
            mu += (h.x * h.x + h.y * h.y) * *w;
        }
        let rh = Mat2::new(e.x, e.y, e.y, -e.x);
        let rh_t = rh.transpose();
        let mut s_row = Vec::with_capacity(m);
        for (w, h) in row.iter().zip(&hat) {
            let lh = Mat2::new(h.x, h.y, h.y, -h.x);
            s_row.push(lh.mul(&rh_t).scaled(*w / mu));
        }

        affine.push(a_row);
        similarity.push(s_row);
        baseline.push(e);
    }

    Ok(Coefficients {
        weights,
        affine,
        similarity,
        baseline,
    })
}

/// Dominant principal standard deviation of the curve around its centroid.
/// Renderers use it to draw a scale-normalized thumbnail of the original
/// shape next to the deformed one.
pub fn curve_scale(curve: &[Point]) -> Scalar {
    if curve.is_empty() {
        return 0.0;
    }
    let n = curve.len() as Scalar;
    let mut mx = 0.0;
    let mut my = 0.0;
    for p in curve {
        mx += p.x;
        my += p.y;
    }
    mx /= n;
    my /= n;
    let mut cxx = 0.0;
    let mut cxy = 0.0;
    let mut cyy = 0.0;
    for p in curve {
        let dx = p.x - mx;
        let dy = p.y - my;
        cxx += dx * dx;
        cxy += dx * dy;
        cyy += dy * dy;
    }
    cxx /= n;
    cxy /= n;
    cyy /= n;
    // Larger eigenvalue of the symmetric 2x2 covariance.
    let half_tr = 0.5 * (cxx + cyy);
    let disc = (0.5 * (cxx - cyy)).powi(2) + cxy * cxy;
    (half_tr + disc.sqrt()).max(0.0).sqrt()
}
