use crate::poly_trig_exact_integral;
use legquad::proptest::{interval, order};
use legquad::{evaluate_integrand, integrate, integrate_with, Error};
use matrixcompare::assert_scalar_eq;
use proptest::prelude::*;

#[test]
fn integrate_matches_exact_integral() {
    let exact = poly_trig_exact_integral(1.0, 3.0);
    let approx = integrate(1.0, 3.0, 20).unwrap();
    assert_scalar_eq!(approx, exact, comp = abs, tol = 1e-9);
}

#[test]
fn integrate_converges_with_increasing_order() {
    let i20: f64 = integrate(1.0, 3.0, 20).unwrap();
    let i40: f64 = integrate(1.0, 3.0, 40).unwrap();
    assert!((i20 - i40).abs() < 1e-9);
}

#[test]
fn integrate_is_deterministic() {
    let first: f64 = integrate(1.0, 3.0, 17).unwrap();
    for _ in 0..10 {
        let repeated: f64 = integrate(1.0, 3.0, 17).unwrap();
        assert_eq!(repeated.to_bits(), first.to_bits());
    }
}

#[test]
fn integrate_over_degenerate_interval_is_zero() {
    for n in 1..=50 {
        assert_eq!(integrate(2.0, 2.0, n).unwrap(), 0.0);
    }
}

#[test]
fn integrate_propagates_invalid_order() {
    assert!(matches!(integrate(1.0, 3.0, 0), Err(Error::InvalidArgument { .. })));
    assert!(matches!(integrate(1.0, 3.0, -3), Err(Error::InvalidArgument { .. })));
    assert!(matches!(
        integrate_with(1.0, 3.0, 0, |x: f64| x),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn single_point_rule_is_midpoint_rule() {
    let approx = integrate(0.0, 2.0, 1).unwrap();
    assert_scalar_eq!(approx, 2.0 * evaluate_integrand(1.0), comp = abs, tol = 1e-15);
}

#[test]
fn integrate_with_closure_reproduces_fixed_integrand() {
    for n in [1, 2, 5, 20] {
        let fixed: f64 = integrate(-0.5, 2.5, n).unwrap();
        let closure = integrate_with(-0.5, 2.5, n, |x: f64| evaluate_integrand(x)).unwrap();
        assert_eq!(fixed, closure);
    }
}

#[test]
fn integrate_with_is_exact_for_polynomials_up_to_degree_2n_minus_1() {
    let (a, b) = (0.0f64, 2.0f64);
    for n in 1..=10usize {
        for k in 0..(2 * n) as i32 {
            let exact = (b.powi(k + 1) - a.powi(k + 1)) / (k as f64 + 1.0);
            let approx = integrate_with(a, b, n, |x: f64| x.powi(k)).unwrap();
            assert_scalar_eq!(approx, exact, comp = abs, tol = 1e-12 * exact.abs().max(1.0));
        }
    }
}

#[test]
fn integrate_reversed_interval_flips_sign() {
    let forward: f64 = integrate(1.0, 3.0, 20).unwrap();
    let backward: f64 = integrate(3.0, 1.0, 20).unwrap();
    assert_scalar_eq!(backward, -forward, comp = abs, tol = 1e-12 * forward.abs());
}

proptest! {
    #[test]
    fn integrate_is_antisymmetric_in_bounds(bounds in interval(), n in order(40)) {
        let (a, b) = (*bounds.a(), *bounds.b());
        let forward = integrate(a, b, n).unwrap();
        let backward = integrate(b, a, n).unwrap();
        let tol = 1e-12 * forward.abs().max(1.0);
        prop_assert!((forward + backward).abs() <= tol);
    }

    #[test]
    fn integrate_is_additive_over_subintervals(bounds in interval()) {
        // With enough points the rule is exact up to round-off on any of the intervals
        let (a, b) = (*bounds.a(), *bounds.b());
        let c = 0.5 * (a + b);
        let whole = integrate(a, b, 40).unwrap();
        let split = integrate(a, c, 40).unwrap() + integrate(c, b, 40).unwrap();
        let tol = 1e-10 * whole.abs().max(1.0);
        prop_assert!((whole - split).abs() <= tol);
    }
}
