//! Session lifecycle: init validation, atomic failure, re-init, reset.

use curvewarp::model::{DeformError, Mode, Point, Scalar, WeightConfig, WeightKind};
use curvewarp::MlsSession;

fn circle(n: usize, radius: Scalar) -> Vec<Point> {
    let pi = std::f64::consts::PI as Scalar;
    (0..n)
        .map(|i| {
            let t = (i as Scalar) / (n as Scalar) * 2.0 * pi;
            Point::new(radius * t.cos(), radius * t.sin())
        })
        .collect()
}

#[test]
fn init_rejects_out_of_range_index() {
    let mut s = MlsSession::new();
    let curve = circle(20, 100.0);
    let err = s.init(&curve, &[0, 5, 20]).unwrap_err();
    assert_eq!(err, DeformError::IndexOutOfRange { index: 20, len: 20 });
}

#[test]
fn init_rejects_duplicate_index() {
    let mut s = MlsSession::new();
    let curve = circle(20, 100.0);
    let err = s.init(&curve, &[0, 5, 5]).unwrap_err();
    assert_eq!(err, DeformError::DuplicateControlIndex { index: 5 });
}

#[test]
fn init_rejects_empty_control_set() {
    let mut s = MlsSession::new();
    let curve = circle(20, 100.0);
    assert_eq!(s.init(&curve, &[]).unwrap_err(), DeformError::EmptyControlSet);
}

#[test]
fn init_rejects_non_positive_clamp() {
    // clamp <= 0 would let a control vertex's own distance fall below the
    // knee with weight 1/0, flooding the tables with NaN.
    let curve = circle(20, 100.0);
    for clamp in [0.0, -1.0, Scalar::NAN] {
        let mut s = MlsSession::with_config(WeightConfig {
            kind: WeightKind::InverseCubicDist,
            clamp,
        });
        let err = s.init(&curve, &[0, 5, 10, 15]).unwrap_err();
        assert_eq!(err, DeformError::InvalidWeightClamp);
        assert!(s.curve().is_empty());
    }
}

#[test]
fn init_rejects_coincident_controls() {
    // Distinct indices, identical coordinates: the weighted covariance is
    // rank-zero at every vertex.
    let mut curve = circle(20, 100.0);
    curve[3] = Point::new(40.0, 40.0);
    curve[7] = Point::new(40.0, 40.0);
    curve[11] = Point::new(40.0, 40.0);
    let mut s = MlsSession::new();
    let err = s.init(&curve, &[3, 7, 11]).unwrap_err();
    assert!(matches!(err, DeformError::DegenerateControlSet { .. }));
}

#[test]
fn init_rejects_collinear_controls() {
    // Controls spanning only a line leave the covariance rank-one.
    let curve: Vec<Point> = (0..30).map(|i| Point::new(i as Scalar * 10.0, 0.0)).collect();
    let mut s = MlsSession::new();
    let err = s.init(&curve, &[0, 10, 29]).unwrap_err();
    assert!(matches!(err, DeformError::DegenerateControlSet { .. }));
}

#[test]
fn failed_init_keeps_previous_state() {
    let mut s = MlsSession::new();
    let curve = circle(24, 100.0);
    s.init(&curve, &[0, 6, 12, 18]).unwrap();
    let curve_before = s.curve().to_vec();
    let controls_before = s.control_points().to_vec();

    let bad: Vec<Point> = (0..10).map(|i| Point::new(i as Scalar, 0.0)).collect();
    assert!(s.init(&bad, &[0, 4, 9]).is_err());

    assert_eq!(s.curve(), curve_before.as_slice());
    assert_eq!(s.control_points(), controls_before.as_slice());
    assert_eq!(s.control_indices(), &[0, 6, 12, 18]);
}

#[test]
fn reinit_replaces_derived_tables() {
    let mut s = MlsSession::new();
    let a = circle(24, 100.0);
    s.init(&a, &[0, 6, 12, 18]).unwrap();
    assert_eq!(s.coefficients().weights.len(), 24);
    assert_eq!(s.coefficients().weights[0].len(), 4);

    let b = circle(40, 80.0);
    s.init(&b, &[0, 10, 20]).unwrap();
    assert_eq!(s.curve().len(), 40);
    assert_eq!(s.coefficients().weights.len(), 40);
    assert_eq!(s.coefficients().weights[0].len(), 3);
    assert_eq!(s.deformed_control_points(), s.control_points());
}

#[test]
fn drag_then_reset_restores_original() {
    let mut s = MlsSession::new();
    let curve = circle(24, 100.0);
    s.init(&curve, &[0, 6, 12, 18]).unwrap();

    s.deformed_control_points_mut()[0].x += 30.0;
    s.update_affine();
    assert_ne!(s.curve(), s.original_curve());

    s.reset();
    assert_eq!(s.curve(), s.original_curve());
    assert_eq!(s.deformed_control_points(), s.control_points());
}

#[test]
fn mode_dispatch_matches_direct_calls() {
    let curve = circle(24, 100.0);
    let idx = [0usize, 6, 12, 18];

    let mut a = MlsSession::new();
    a.init(&curve, &idx).unwrap();
    a.deformed_control_points_mut()[1].y -= 25.0;
    a.update(Mode::Similarity).unwrap();

    let mut b = MlsSession::new();
    b.init(&curve, &idx).unwrap();
    b.deformed_control_points_mut()[1].y -= 25.0;
    b.update_similarity();

    assert_eq!(a.curve(), b.curve());
}

#[test]
fn updates_on_fresh_session_are_noops() {
    let mut s = MlsSession::new();
    s.update_affine();
    s.update_similarity();
    s.update_rigid().unwrap();
    assert!(s.curve().is_empty());
}

#[test]
fn original_scale_tracks_curve_spread() {
    let mut s = MlsSession::new();
    let curve = circle(64, 100.0);
    s.init(&curve, &[0, 16, 32, 48]).unwrap();
    // For a circle of radius r the principal standard deviation is r/sqrt(2).
    let expected = 100.0 / (2.0 as Scalar).sqrt();
    assert!((s.original_scale() - expected).abs() < 1.0);
}
