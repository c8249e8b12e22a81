// File: crates/graph-core/tests/sampler.rs
// Purpose: Validate sample placement, filtering of non-finite values, and request policy.

use graph_core::{sample, FunctionSampler, PlotError, PlotRequest, Point3D};

#[test]
fn parabola_over_symmetric_domain() {
    let pts = sample(|x| x * x, -2.0, 2.0, 4).expect("valid request");
    let want = vec![
        Point3D::new(-2.0, 4.0, 0.0),
        Point3D::new(-1.0, 1.0, 0.0),
        Point3D::new(0.0, 0.0, 0.0),
        Point3D::new(1.0, 1.0, 0.0),
        Point3D::new(2.0, 4.0, 0.0),
    ];
    assert_eq!(pts, want);
}

#[test]
fn reciprocal_drops_pole() {
    let pts = sample(|x| 1.0 / x, -1.0, 1.0, 2).expect("valid request");
    assert_eq!(pts, vec![Point3D::new(-1.0, -1.0, 0.0), Point3D::new(1.0, 1.0, 0.0)]);
}

#[test]
fn constant_nan_yields_nothing() {
    for &(lo, hi, n) in &[(-1.0, 1.0, 1usize), (0.0, 10.0, 7), (5.0, -5.0, 100)] {
        let pts = sample(|_| f64::NAN, lo, hi, n).expect("valid request");
        assert!(pts.is_empty(), "expected no points for [{lo}, {hi}] / {n}");
    }
}

#[test]
fn infinities_are_filtered_too() {
    let f = |x: f64| {
        if x > 0.0 {
            f64::INFINITY
        } else if x < 0.0 {
            f64::NEG_INFINITY
        } else {
            3.0
        }
    };
    let pts = sample(f, -1.0, 1.0, 2).expect("valid request");
    assert_eq!(pts, vec![Point3D::new(0.0, 3.0, 0.0)]);
}

#[test]
fn finite_function_keeps_every_sample_in_order() {
    let n = 37;
    let pts = sample(|x| x.sin(), -3.0, 5.0, n).expect("valid request");
    assert_eq!(pts.len(), n + 1);
    assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
    assert!(pts.iter().all(|p| p.z == 0.0));
    assert_eq!(pts.first().map(|p| p.x), Some(-3.0));
    assert_eq!(pts.last().map(|p| p.x), Some(5.0));
}

#[test]
fn reversed_sweep_descends() {
    let pts = sample(|x| 2.0 * x, 3.0, -3.0, 6).expect("valid request");
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 2.0, 1.0, 0.0, -1.0, -2.0, -3.0]);
    assert!(pts.iter().all(|p| p.y == 2.0 * p.x));
}

#[test]
fn samples_stay_inside_domain() {
    // steps that do not divide evenly in binary
    for &(lo, hi, n) in &[(0.1, 0.7, 3usize), (-0.3, 0.9, 7), (1.1, -2.2, 11), (0.0, 1.0, 49)] {
        let (a, b) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let pts = sample(|x| x, lo, hi, n).expect("valid request");
        assert!(pts.len() <= n + 1);
        for p in &pts {
            assert!(p.x >= a && p.x <= b, "x={} outside [{a}, {b}]", p.x);
        }
    }
}

#[test]
fn last_sample_lands_on_max_x() {
    for &(lo, hi, n) in &[(-0.3, 0.9, 7usize), (0.0, 1.0, 49), (0.1, 0.7, 3), (1.1, -2.2, 11)] {
        let pts = sample(|x| x, lo, hi, n).expect("valid request");
        assert_eq!(pts.first().map(|p| p.x), Some(lo));
        assert_eq!(pts.last().map(|p| p.x), Some(hi), "[{lo}, {hi}] / {n}");
    }
}

#[test]
fn full_f64_range_stays_finite_and_ordered() {
    let pts = sample(|_| 1.0, -f64::MAX, f64::MAX, 4).expect("valid request");
    assert_eq!(pts.len(), 5);
    assert!(pts.iter().all(Point3D::is_finite));
    assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
    assert_eq!(pts[0].x, -f64::MAX);
    assert_eq!(pts[2].x, 0.0);
    assert_eq!(pts[4].x, f64::MAX);

    let pts = sample(|_| 1.0, f64::MAX, -f64::MAX, 2).expect("valid request");
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![f64::MAX, 0.0, -f64::MAX]);
}

#[test]
fn zero_point_count_is_rejected() {
    let err = sample(|x| x, -1.0, 1.0, 0).unwrap_err();
    assert!(matches!(err, PlotError::InvalidArgument(_)));
    assert!(FunctionSampler::new(PlotRequest::new(0.0, 1.0, 0)).is_err());
}

#[test]
fn degenerate_domain_repeats_the_endpoint() {
    let pts = sample(|x| x + 1.0, 2.0, 2.0, 3).expect("valid request");
    assert_eq!(pts, vec![Point3D::new(2.0, 3.0, 0.0); 4]);
}

#[test]
fn deterministic_and_restartable() {
    let sampler = FunctionSampler::new(PlotRequest::new(-1.0, 1.0, 10)).unwrap();
    let a = sampler.sample(|x| x.powi(3));
    let b = sampler.sample(|x| x.powi(3));
    assert_eq!(a, b);

    let xs = sampler.xs();
    let first: Vec<f64> = xs.clone().collect();
    let second: Vec<f64> = xs.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 11);
}

#[test]
fn stats_count_kept_and_dropped() {
    let sampler = FunctionSampler::new(PlotRequest::new(-2.0, 2.0, 4)).unwrap();
    let (pts, stats) = sampler.sample_with_stats(|x| x.ln());
    // ln is NaN below zero and -inf at zero
    assert_eq!(stats.requested, 5);
    assert_eq!(stats.kept, 2);
    assert_eq!(stats.dropped, 3);
    assert_eq!(pts.len(), stats.kept);
}

#[test]
fn fallible_function_stops_at_first_error() {
    let sampler = FunctionSampler::new(PlotRequest::new(0.0, 4.0, 4)).unwrap();
    let mut calls = 0;
    let res: Result<Vec<Point3D>, String> = sampler.try_sample(|x| {
        calls += 1;
        if x >= 2.0 { Err(format!("domain error at {x}")) } else { Ok(x) }
    });
    assert_eq!(res.unwrap_err(), "domain error at 2");
    assert_eq!(calls, 3);
}

#[test]
fn request_helpers() {
    let req = PlotRequest::new(-2.0, 2.0, 4);
    assert_eq!(req.step(), 1.0);
    assert_eq!(req.sample_count(), 5);
    assert_eq!(req.reversed(), PlotRequest::new(2.0, -2.0, 4));
    assert_eq!(req.reversed().step(), -1.0);
    assert!(req.validate().is_ok());
    assert_eq!(PlotRequest::new(0.0, 1.0, usize::MAX).sample_count(), usize::MAX);
}
