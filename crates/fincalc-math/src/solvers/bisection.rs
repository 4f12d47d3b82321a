//! Bisection root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SearchBracket, SolverConfig, SolverResult, StopReason};

/// One narrowing step, reported to the observer of
/// [`bisection_with_observer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionStep {
    /// 1-based step number.
    pub iteration: u32,
    /// Midpoint evaluated in this step.
    pub mid: f64,
    /// Function value at the midpoint.
    pub f_mid: f64,
    /// Bracket after the update.
    pub bracket: SearchBracket,
}

/// Bisection root-finding algorithm.
///
/// Repeatedly halves the bracket, keeping the half whose ends still have
/// opposite signs. The sign of each midpoint is always compared against
/// the value at the current lower end.
///
/// Requires: `f(low) * f(high) <= 0`. A bracket whose ends share a sign
/// fails with [`MathError::InvalidBracket`] before any iteration, as does
/// an end that evaluates to NaN. Infinite ends take part in the sign test.
/// An end that evaluates to exactly zero is returned as the root.
///
/// The search stops when the bracket is no wider than `config.tolerance`,
/// when a midpoint evaluates to exactly zero, or after
/// `config.max_iterations` steps; the midpoint of the final bracket is
/// returned. Hitting the cap is not an error.
///
/// # Example
///
/// ```rust
/// use fincalc_math::solvers::{bisection, SearchBracket, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let bracket = SearchBracket::new(1.0, 2.0).unwrap();
///
/// let result = bisection(f, bracket, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn bisection<F>(f: F, bracket: SearchBracket, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    bisection_with_observer(f, bracket, config, |_| {})
}

/// [`bisection`] that reports every narrowed bracket to `observer`.
///
/// The observer is not called when the bracket check fails or when an end
/// of the initial bracket is already a root.
pub fn bisection_with_observer<F, O>(
    f: F,
    bracket: SearchBracket,
    config: &SolverConfig,
    mut observer: O,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    O: FnMut(&BisectionStep),
{
    config.validate()?;

    let mut lo = bracket.low();
    let mut hi = bracket.high();

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    // Infinite ends keep their sign; NaN has none.
    if f_lo.is_nan() || f_hi.is_nan() || f_lo * f_hi > 0.0 {
        debug!(
            "bisection rejected bracket [{lo}, {hi}]: f(low) = {f_lo:e}, f(high) = {f_hi:e}"
        );
        return Err(MathError::invalid_bracket(lo, hi, f_lo, f_hi));
    }

    // Sign bookkeeping against f(low) cannot move away from a zero at low.
    if f_lo == 0.0 {
        return Ok(exact_zero(lo, 0));
    }
    if f_hi == 0.0 {
        return Ok(exact_zero(hi, 0));
    }

    debug!(
        "bisection start on [{lo}, {hi}], tolerance {:e}, max {} iterations",
        config.tolerance, config.max_iterations
    );

    let mut iterations = 0;
    while hi - lo > config.tolerance && iterations < config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);
        iterations += 1;

        if f_mid == 0.0 {
            observer(&BisectionStep {
                iteration: iterations,
                mid,
                f_mid,
                bracket: SearchBracket::narrowed(lo, hi),
            });
            debug!("bisection hit exact root {mid} after {iterations} iterations");
            return Ok(exact_zero(mid, iterations));
        }

        if f_mid * f_lo < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }

        trace!("bisection step {iterations}: mid = {mid}, f(mid) = {f_mid:e}");
        observer(&BisectionStep {
            iteration: iterations,
            mid,
            f_mid,
            bracket: SearchBracket::narrowed(lo, hi),
        });
    }

    let root = (lo + hi) / 2.0;
    let stop = if hi - lo <= config.tolerance {
        StopReason::Tolerance
    } else {
        warn!(
            "bisection reached {} iterations with bracket width {:e} above tolerance {:e}",
            config.max_iterations,
            hi - lo,
            config.tolerance
        );
        StopReason::IterationCap
    };

    debug!("bisection converged to {root} after {iterations} iterations");

    Ok(SolverResult {
        root,
        iterations,
        residual: f(root),
        stop,
    })
}

/// Bisection on `[low, high]` returning only the rate.
///
/// Validates the bracket and configuration, then runs [`bisection`].
///
/// ```rust
/// use fincalc_math::solvers::solve;
///
/// let rate = solve(|r: f64| r - 0.05, 0.0, 1.0, 1e-6, 10_000).unwrap();
/// assert!((rate - 0.05).abs() < 1e-6);
/// ```
pub fn solve<F>(f: F, low: f64, high: f64, tolerance: f64, max_iterations: u32) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    let bracket = SearchBracket::new(low, high)?;
    let config = SolverConfig::new(tolerance, max_iterations);
    bisection(f, bracket, &config).map(|result| result.root)
}

fn exact_zero(root: f64, iterations: u32) -> SolverResult {
    SolverResult {
        root,
        iterations,
        residual: 0.0,
        stop: StopReason::ExactZero,
    }
}
