use crate::model::{Point, Scalar, WeightConfig, WeightKind};

/// N x M table of non-negative falloff weights, one row per curve vertex.
pub type WeightTable = Vec<Vec<Scalar>>;

/// Builds the weight table from the original geometry. Rows are never
/// recomputed afterwards; updates re-apply them to deformed positions.
pub fn compute_weights(
    curve: &[Point],
    controls: &[Point],
    control_idx: &[usize],
    cfg: &WeightConfig,
) -> WeightTable {
    match cfg.kind {
        WeightKind::InverseCubicDist => euclidean_weights(curve, controls, cfg.clamp),
        WeightKind::GeodesicIndex => geodesic_weights(curve.len(), control_idx, cfg.clamp),
    }
}

fn euclidean_weights(curve: &[Point], controls: &[Point], clamp: Scalar) -> WeightTable {
    let mut table = Vec::with_capacity(curve.len());
    for v in curve {
        let mut row = Vec::with_capacity(controls.len());
        for c in controls {
            let dx = c.x - v.x;
            let dy = c.y - v.y;
            let d = (dx * dx + dy * dy).sqrt().powi(3);
            // Clamp near-coincident samples so the falloff cannot blow up.
            row.push(if d < clamp { 1.0 } else { 1.0 / d });
        }
        table.push(row);
    }
    table
}

fn geodesic_weights(n: usize, control_idx: &[usize], clamp: Scalar) -> WeightTable {
    let mut table = Vec::with_capacity(n);
    for v in 0..n {
        let mut row = Vec::with_capacity(control_idx.len());
        for &i in control_idx {
            let d = (i as Scalar - v as Scalar).powi(2);
            row.push(if d < clamp { 1.0 } else { 1.0 / d });
        }
        table.push(row);
    }
    table
}

/// Weighted mean of `pts` under one weight row. Every weight is strictly
/// positive and rows are non-empty, so the divisor cannot vanish.
pub fn weighted_mean(row: &[Scalar], pts: &[Point]) -> Point {
    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut sw = 0.0;
    for (w, p) in row.iter().zip(pts) {
        sx += p.x * *w;
        sy += p.y * *w;
        sw += *w;
    }
    Point {
        x: sx / sw,
        y: sy / sw,
    }
}
