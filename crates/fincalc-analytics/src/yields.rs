//! Yield to maturity and internal rate of return.
//!
//! Both measures are solved by bisection on a [`ValuationFunction`]. The
//! default brackets are calculator conventions and can be replaced through
//! [`RateSolver::with_bracket`].
//!
//! # Example
//!
//! ```rust
//! use fincalc_analytics::yields::{RateSolver, yield_to_maturity};
//! use fincalc_analytics::valuation::BondValuation;
//! use fincalc_core::types::BondSpec;
//!
//! let bond = BondSpec::from_percent(1000.0, 5.0, 10).unwrap();
//!
//! let ytm = yield_to_maturity(&bond, 950.0).unwrap();
//! println!("YTM: {:.2}%", ytm.percent());
//!
//! // Tighter tolerance through an explicit solver
//! let precise = RateSolver::ytm()
//!     .with_tolerance(1e-10)
//!     .solve(&BondValuation::new(bond, 950.0))
//!     .unwrap();
//! assert!((precise.rate - ytm.rate).abs() < 1e-6);
//! ```

use log::debug;
use serde::Serialize;

use fincalc_core::types::{to_percent, BondSpec, CashFlowSeries, Rate};
use fincalc_math::solvers::{bisection, SearchBracket, SolverConfig, StopReason};

use crate::error::AnalyticsResult;
use crate::valuation::{BondValuation, CashFlowValuation, ValuationFunction};

/// Default IRR search range: -99% to +100% per period.
pub const IRR_BRACKET: (f64, f64) = (-0.99, 1.0);

/// Default YTM search range: 0.01% to 100% per period.
pub const YTM_BRACKET: (f64, f64) = (0.0001, 1.0);

/// A solved rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateResult {
    /// The rate as a fraction (0.05 for 5%).
    pub rate: Rate,
    /// Bisection steps taken.
    pub iterations: u32,
    /// Valuation residual at `rate`.
    pub residual: f64,
    /// Whether the iteration cap ended the search before the tolerance
    /// was met.
    pub hit_iteration_cap: bool,
}

impl RateResult {
    /// The rate in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        to_percent(self.rate)
    }
}

/// Bracket and stopping rules for a rate search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSolver {
    bracket: SearchBracket,
    config: SolverConfig,
}

impl RateSolver {
    /// Creates a solver over `bracket` with `config`.
    #[must_use]
    pub fn new(bracket: SearchBracket, config: SolverConfig) -> Self {
        Self { bracket, config }
    }

    /// Default IRR solver: `[-0.99, 1.0]`, tolerance `1e-6`, 10 000 steps.
    #[must_use]
    pub fn irr() -> Self {
        Self::with_default_config(IRR_BRACKET)
    }

    /// Default YTM solver: `[0.0001, 1.0]`, tolerance `1e-6`, 10 000 steps.
    #[must_use]
    pub fn ytm() -> Self {
        Self::with_default_config(YTM_BRACKET)
    }

    fn with_default_config((low, high): (f64, f64)) -> Self {
        Self {
            bracket: SearchBracket::new(low, high).expect("default bracket is ordered and finite"),
            config: SolverConfig::default(),
        }
    }

    /// Replaces the search bracket.
    #[must_use]
    pub fn with_bracket(mut self, bracket: SearchBracket) -> Self {
        self.bracket = bracket;
        self
    }

    /// Replaces the stopping rules.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// The search bracket.
    #[must_use]
    pub fn bracket(&self) -> SearchBracket {
        self.bracket
    }

    /// The stopping rules.
    #[must_use]
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Finds the rate at which `valuation` is zero.
    pub fn solve<V>(&self, valuation: &V) -> AnalyticsResult<RateResult>
    where
        V: ValuationFunction + ?Sized,
    {
        let result = bisection(|r| valuation.residual(r), self.bracket, &self.config)?;
        Ok(RateResult {
            rate: result.root,
            iterations: result.iterations,
            residual: result.residual,
            hit_iteration_cap: result.stop == StopReason::IterationCap,
        })
    }

    /// Internal rate of return of `flows`.
    pub fn internal_rate_of_return(&self, flows: &CashFlowSeries) -> AnalyticsResult<RateResult> {
        let result = self.solve(&CashFlowValuation::new(flows))?;
        debug!(
            "IRR of {} periods: {:.6} after {} iterations",
            flows.len(),
            result.rate,
            result.iterations
        );
        Ok(result)
    }

    /// Yield to maturity of `bond` trading at `price`.
    pub fn yield_to_maturity(&self, bond: &BondSpec, price: f64) -> AnalyticsResult<RateResult> {
        let result = self.solve(&BondValuation::new(*bond, price))?;
        debug!(
            "YTM at price {price}: {:.6} after {} iterations",
            result.rate, result.iterations
        );
        Ok(result)
    }
}

/// IRR over the default `[-0.99, 1.0]` bracket.
///
/// Fails with a bracket error when the NPV has the same sign at -99% and
/// +100%, i.e. no IRR exists in that range.
pub fn internal_rate_of_return(flows: &CashFlowSeries) -> AnalyticsResult<RateResult> {
    RateSolver::irr().internal_rate_of_return(flows)
}

/// YTM over the default `[0.0001, 1.0]` bracket.
pub fn yield_to_maturity(bond: &BondSpec, price: f64) -> AnalyticsResult<RateResult> {
    RateSolver::ytm().yield_to_maturity(bond, price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;
    use approx::assert_relative_eq;
    use fincalc_math::MathError;

    fn flows(amounts: &[f64]) -> CashFlowSeries {
        CashFlowSeries::new(amounts.to_vec()).unwrap()
    }

    #[test]
    fn test_irr_textbook() {
        let cfs = flows(&[-1000.0, 300.0, 400.0, 500.0]);

        let result = internal_rate_of_return(&cfs).unwrap();

        assert!((result.percent() - 8.90).abs() < 0.01);
        assert!(!result.hit_iteration_cap);
    }

    #[test]
    fn test_irr_annuity() {
        let cfs = flows(&[-1000.0, 400.0, 400.0, 400.0]);
        let result = internal_rate_of_return(&cfs).unwrap();
        // IRR should be ~9.7%
        assert_relative_eq!(result.rate, 0.09701, epsilon = 1e-4);
    }

    #[test]
    fn test_irr_negative() {
        let cfs = flows(&[-1000.0, 200.0, 200.0, 200.0]);
        let result = internal_rate_of_return(&cfs).unwrap();
        assert!(result.rate < 0.0);
        let npv = CashFlowValuation::new(&cfs).residual(result.rate);
        assert!(npv.abs() < 0.01);
    }

    #[test]
    fn test_irr_no_sign_change() {
        let cfs = flows(&[-100.0, -50.0, -10.0]);

        let err = internal_rate_of_return(&cfs).unwrap_err();

        assert!(err.is_bracket_error());
        assert!(matches!(
            err,
            AnalyticsError::Math(MathError::InvalidBracket { a, b, .. }) if a == -0.99 && b == 1.0
        ));
    }

    #[test]
    fn test_ytm_discount_bond() {
        let bond = BondSpec::from_percent(1000.0, 5.0, 10).unwrap();

        let result = yield_to_maturity(&bond, 950.0).unwrap();

        assert!(result.rate > 0.05);
        assert!((result.percent() - 5.67).abs() < 0.01);
    }

    #[test]
    fn test_ytm_premium_bond() {
        let bond = BondSpec::from_percent(1000.0, 5.0, 10).unwrap();
        let result = yield_to_maturity(&bond, 1100.0).unwrap();
        assert!(result.rate < 0.05);
    }

    #[test]
    fn test_ytm_at_par() {
        let bond = BondSpec::from_percent(1000.0, 5.0, 10).unwrap();
        let result = yield_to_maturity(&bond, 1000.0).unwrap();
        assert_relative_eq!(result.rate, 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_ytm_price_above_undiscounted_value() {
        // Price above coupons + face at ~0% yield: root lies below the bracket.
        let bond = BondSpec::from_percent(1000.0, 5.0, 10).unwrap();
        let err = yield_to_maturity(&bond, 1600.0).unwrap_err();
        assert!(err.is_bracket_error());
    }

    #[test]
    fn test_custom_bracket_finds_negative_yield() {
        let bond = BondSpec::from_percent(1000.0, 5.0, 10).unwrap();
        let solver = RateSolver::ytm().with_bracket(SearchBracket::new(-0.5, 1.0).unwrap());
        let result = solver.yield_to_maturity(&bond, 1600.0).unwrap();
        assert!(result.rate < 0.0);
    }

    #[test]
    fn test_iteration_cap_reported() {
        let cfs = flows(&[-1000.0, 300.0, 400.0, 500.0]);
        let result = RateSolver::irr()
            .with_max_iterations(5)
            .internal_rate_of_return(&cfs)
            .unwrap();
        assert_eq!(result.iterations, 5);
        assert!(result.hit_iteration_cap);
    }

    #[test]
    fn test_default_solvers() {
        let irr = RateSolver::irr();
        assert_eq!(irr.bracket().low(), -0.99);
        assert_eq!(irr.bracket().high(), 1.0);
        assert_eq!(irr.config(), SolverConfig::default());

        let ytm = RateSolver::ytm();
        assert_eq!(ytm.bracket().low(), 0.0001);
    }
}
