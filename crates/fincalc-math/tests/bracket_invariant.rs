//! Property-based tests for the bisection bracket invariant.
//!
//! After every step the narrowed bracket must still have ends of opposite
//! sign (or a zero end), and the search must be deterministic.

use fincalc_math::prelude::*;
use proptest::prelude::*;

/// `scale * (x - root) * ((x - centre)^2 + lift)`: exactly one real root.
fn single_root_cubic(scale: f64, root: f64, centre: f64, lift: f64) -> impl Fn(f64) -> f64 {
    move |x| scale * (x - root) * ((x - centre).powi(2) + lift)
}

fn polynomial(coeffs: Vec<f64>) -> impl Fn(f64) -> f64 {
    move |x| coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn bracket_keeps_sign_change_for_single_root_cubics(
        scale in prop_oneof![-50.0..-0.1f64, 0.1..50.0f64],
        root in -0.9..1.9f64,
        centre in -3.0..3.0f64,
        lift in 0.01..5.0f64,
    ) {
        let f = single_root_cubic(scale, root, centre, lift);
        let bracket = SearchBracket::new(-1.0, 2.0).unwrap();
        let config = SolverConfig::default();

        let mut violations = Vec::new();
        let result = bisection_with_observer(&f, bracket, &config, |step| {
            let (lo, hi) = (step.bracket.low(), step.bracket.high());
            if f(lo) * f(hi) > 0.0 {
                violations.push(*step);
            }
        })
        .unwrap();

        prop_assert!(violations.is_empty(), "invariant broken at {:?}", violations);
        prop_assert!((result.root - root).abs() <= config.tolerance);
        prop_assert!(result.iterations <= 22);
    }

    #[test]
    fn bracket_keeps_sign_change_for_random_polynomials(
        coeffs in prop::collection::vec(-10.0..10.0f64, 1..6),
        low in -2.0..0.0f64,
        width in 0.1..4.0f64,
    ) {
        let f = polynomial(coeffs);
        let high = low + width;
        prop_assume!(f(low) * f(high) < 0.0);

        let bracket = SearchBracket::new(low, high).unwrap();
        let mut last = bracket;
        let result = bisection_with_observer(&f, bracket, &SolverConfig::default(), |step| {
            let (lo, hi) = (step.bracket.low(), step.bracket.high());
            assert!(f(lo) * f(hi) <= 0.0, "invariant broken at step {}", step.iteration);
            assert!(lo >= last.low() && hi <= last.high(), "bracket grew");
            last = step.bracket;
        })
        .unwrap();

        prop_assert!(bracket.contains(result.root));
    }

    #[test]
    fn same_inputs_same_output(
        root in -0.5..0.9f64,
        tolerance in 1e-10..1e-3f64,
    ) {
        let f = |x: f64| (x - root).powi(3) + (x - root);
        let bracket = SearchBracket::new(-0.99, 1.0).unwrap();
        let config = SolverConfig::new(tolerance, 10_000);

        let first = bisection(f, bracket, &config).unwrap();
        let second = bisection(f, bracket, &config).unwrap();

        prop_assert_eq!(first, second);
    }
}

#[test]
fn zero_at_lower_end_is_returned_not_lost() {
    // Comparing signs against f(low) == 0.0 would push low upwards forever.
    let f = |x: f64| x * (x - 5.0);
    let bracket = SearchBracket::new(0.0, 1.0).unwrap();

    let result = bisection(f, bracket, &SolverConfig::default()).unwrap();

    assert_eq!(result.root, 0.0);
    assert_eq!(result.stop, StopReason::ExactZero);
}

#[test]
fn multiple_roots_converge_to_one_of_them() {
    // Roots at 0.1, 0.5 and 0.9; no attempt is made to pick a particular one.
    let f = |x: f64| (x - 0.1) * (x - 0.5) * (x - 0.9);
    let bracket = SearchBracket::new(0.0, 0.97).unwrap();

    let result = bisection(f, bracket, &SolverConfig::default()).unwrap();

    let nearest = [0.1, 0.5, 0.9]
        .iter()
        .map(|r| (result.root - r).abs())
        .fold(f64::INFINITY, f64::min);
    assert!(nearest <= 1e-6);
}
