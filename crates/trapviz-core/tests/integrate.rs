// File: crates/trapviz-core/tests/integrate.rs
// Purpose: Adaptive trapezoid integration against known antiderivatives, plus its failure modes.

use std::cell::Cell;

use trapviz_core::{
    collect_slices, integrate, integrate_with, Builtin, Error, Integrand, IntegrationOptions, IntegrationResult,
    ZeroAreaPolicy,
};

fn sine_ramp(x: f64) -> f64 {
    1.0 + x + (2.0 * x).sin()
}

fn sine_ramp_area(a: f64, b: f64) -> f64 {
    let anti = |x: f64| x + x * x / 2.0 - (2.0 * x).cos() / 2.0;
    anti(b) - anti(a)
}

#[test]
fn classic_run_is_within_one_percent() {
    let truth = sine_ramp_area(0.0, 5.0);
    assert!((truth - 18.4195).abs() < 1e-3);

    let est = integrate(sine_ramp, 0.0, 5.0, 5, 0.01).expect("integrate");
    assert!(((est - truth) / truth).abs() < 0.01, "est {est} vs true {truth}");
}

#[test]
fn classic_run_slice_count() {
    let r = integrate_with(sine_ramp, 0.0, 5.0, &IntegrationOptions::new(5, 0.01)).unwrap();
    assert_eq!(r.accepted_slice_count, 16);
    assert!(r.max_depth_reached >= 1);
    assert!((r.estimated_area - 18.4103161761).abs() < 1e-9);
}

#[test]
fn builtin_matches_free_function() {
    let b = Builtin::SineRamp;
    let via_trait = integrate(|x| b.eval(x), 0.0, 5.0, 5, 0.01).unwrap();
    let direct = integrate(sine_ramp, 0.0, 5.0, 5, 0.01).unwrap();
    assert_eq!(via_trait, direct);
    assert_eq!(b.true_area(0.0, 5.0), sine_ramp_area(0.0, 5.0));
}

#[test]
fn same_inputs_same_answer() {
    let a = integrate(sine_ramp, -0.5, 3.25, 7, 0.003).unwrap();
    let b = integrate(sine_ramp, -0.5, 3.25, 7, 0.003).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn tighter_tolerance_never_hurts_from_two_percent_down() {
    let truth = sine_ramp_area(0.0, 5.0);
    let tolerances = [0.02, 0.01, 0.005, 0.001, 1e-4, 1e-5, 1e-6];
    let errors: Vec<f64> = tolerances
        .iter()
        .map(|&e| (integrate(sine_ramp, 0.0, 5.0, 5, e).unwrap() - truth).abs())
        .collect();
    for w in errors.windows(2) {
        assert!(w[1] <= w[0], "error grew: {errors:?}");
    }
}

#[test]
fn linear_function_never_subdivides() {
    let f = |x: f64| 3.0 * x + 2.0;
    for &e in &[0.5, 1e-3, 1e-12] {
        let r = integrate_with(f, 0.0, 4.0, &IntegrationOptions::new(4, e)).unwrap();
        assert_eq!(r.accepted_slice_count, 4);
        assert_eq!(r.max_depth_reached, 0);
        assert!((r.estimated_area - 32.0).abs() < 1e-12);
    }
}

#[test]
fn parameters_are_checked_before_evaluating() {
    let calls = Cell::new(0usize);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };

    let err = integrate(f, 0.0, 1.0, 0, 0.01).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "intervals", .. }));

    for bad in [0.0, -0.01, f64::NAN] {
        let err = integrate(f, 0.0, 1.0, 3, bad).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "max_error", .. }));
    }

    let err = integrate_with(f, 0.0, 1.0, &IntegrationOptions::new(3, 0.1).with_max_depth(0)).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "max_depth", .. }));

    assert_eq!(calls.get(), 0);
}

#[test]
fn reversed_or_empty_range_is_rejected() {
    assert_eq!(integrate(sine_ramp, 5.0, 0.0, 5, 0.01), Err(Error::InvalidRange { xmin: 5.0, xmax: 0.0 }));
    assert!(matches!(integrate(sine_ramp, 1.0, 1.0, 5, 0.01), Err(Error::InvalidRange { .. })));
    assert!(matches!(integrate(sine_ramp, 0.0, f64::INFINITY, 5, 0.01), Err(Error::InvalidRange { .. })));
}

#[test]
fn zero_coarse_area_is_a_division_by_zero() {
    // f(-1) + f(1) == 0, so the single trapezoid over [-1, 1] has no area
    let err = integrate(|x| x, -1.0, 1.0, 1, 0.01).unwrap_err();
    assert_eq!(err, Error::DivisionByZero { x1: -1.0, x2: 1.0 });
}

#[test]
fn absolute_fallback_accepts_zero_area_slices() {
    let opts = IntegrationOptions::new(1, 0.01).with_zero_area(ZeroAreaPolicy::AbsoluteFallback);
    let r = integrate_with(|x| x, -1.0, 1.0, &opts).unwrap();
    assert_eq!(r.accepted_slice_count, 1);
    assert_eq!(r.estimated_area, 0.0);

    // slices away from zero still use the relative test
    let r = integrate_with(sine_ramp, 0.0, 5.0, &IntegrationOptions::new(5, 0.01).with_zero_area(ZeroAreaPolicy::AbsoluteFallback)).unwrap();
    assert_eq!(r.accepted_slice_count, 16);
}

#[test]
fn discontinuity_trips_the_depth_guard() {
    let step = |x: f64| if x < 0.3 { 1.0 } else { 1000.0 };
    let opts = IntegrationOptions::new(1, 0.01).with_max_depth(20);
    match integrate_with(step, 0.0, 1.0, &opts) {
        Err(Error::MaxDepthExceeded { max_depth, x1, x2 }) => {
            assert_eq!(max_depth, 20);
            assert!(x1 <= 0.3 && 0.3 <= x2, "failing slice [{x1}, {x2}] should straddle the jump");
        }
        other => panic!("expected MaxDepthExceeded, got {other:?}"),
    }
}

#[test]
fn default_depth_guard_terminates_on_nan() {
    let err = integrate(|_| f64::NAN, 0.0, 1.0, 1, 0.01).unwrap_err();
    assert!(matches!(err, Error::MaxDepthExceeded { max_depth: 50, .. }));
}

#[test]
fn slices_tile_the_range_and_sum_to_the_estimate() {
    let opts = IntegrationOptions::new(5, 0.01);
    let slices = collect_slices(sine_ramp, 0.0, 5.0, &opts).unwrap();
    let direct = integrate_with(sine_ramp, 0.0, 5.0, &opts).unwrap();

    assert_eq!(slices.first().unwrap().x1, 0.0);
    assert_eq!(slices.last().unwrap().x2, 5.0);
    for w in slices.windows(2) {
        assert_eq!(w[0].x2, w[1].x1);
    }
    assert_eq!(IntegrationResult::from_slices(&slices), direct);
}

#[test]
fn slice_vertices_sit_on_the_curve() {
    let slices = collect_slices(sine_ramp, 0.0, 2.0, &IntegrationOptions::new(2, 0.05)).unwrap();
    for s in &slices {
        let v = s.vertices();
        assert_eq!((v[0].x, v[0].y), (s.x1, 0.0));
        assert_eq!((v[1].x, v[1].y), (s.x1, sine_ramp(s.x1)));
        assert_eq!((v[2].x, v[2].y), (s.x2, sine_ramp(s.x2)));
        assert_eq!((v[3].x, v[3].y), (s.x2, 0.0));
    }
}
