use curvewarp::model::{Mode, Point, Scalar};
use curvewarp::MlsSession;
use std::time::Instant;

fn build_circle(n: usize, radius: Scalar) -> Vec<Point> {
    let mut curve = Vec::with_capacity(n);
    for i in 0..n {
        let t = (i as Scalar) / (n as Scalar) * 2.0 * std::f64::consts::PI as Scalar;
        curve.push(Point::new(radius * t.cos(), radius * t.sin()));
    }
    curve
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut verts = 2000usize;
    let mut controls = 16usize;
    let mut frames = 2000usize;
    let mut mode = Mode::Rigid;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--verts=") { if let Ok(v) = val.parse() { verts = v; } }
        else if let Some(val) = a.strip_prefix("--controls=") { if let Ok(v) = val.parse() { controls = v; } }
        else if let Some(val) = a.strip_prefix("--frames=") { if let Ok(v) = val.parse() { frames = v; } }
        else if let Some(val) = a.strip_prefix("--mode=") {
            mode = match val { "affine" => Mode::Affine, "similarity" => Mode::Similarity, _ => Mode::Rigid };
        }
        else if let Some(val) = a.strip_prefix("--assert-ms=") { if let Ok(v) = val.parse() { assert_ms = Some(v); } }
    }

    let curve = build_circle(verts, 200.0);
    let idx: Vec<usize> = (0..controls).map(|k| k * verts / controls).collect();
    let mut session = MlsSession::new();
    let t0 = Instant::now();
    session.init(&curve, &idx).expect("init failed");
    let init_ms = t0.elapsed().as_secs_f64() * 1000.0;

    // Wiggle one control per frame, like an interactive drag
    let mut times_ms: Vec<f64> = Vec::with_capacity(frames);
    let start_all = Instant::now();
    for k in 0..frames {
        let phase = (k as Scalar) * 0.01;
        {
            let pts = session.deformed_control_points_mut();
            pts[0].x += phase.sin() * 0.5;
            pts[0].y += phase.cos() * 0.5;
        }
        let t0 = Instant::now();
        session.update(mode).expect("update failed");
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!(
        "verts={} controls={} frames={} mode={:?} init_ms={:.3} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}",
        verts, controls, frames, mode, init_ms, dur_all, med, p90, p99
    );
    if let Some(th) = assert_ms {
        if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); }
    }
}
