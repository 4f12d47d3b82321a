//! Explicit periodic cash flows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// An ordered series of signed amounts, one per period starting at period 0.
///
/// Period 0 normally carries the initial outlay as a negative amount and
/// the later periods carry the returns. The series is never empty and is
/// immutable once built.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::CashFlowSeries;
///
/// let flows = CashFlowSeries::new(vec![-1000.0, 300.0, 400.0, 500.0]).unwrap();
/// assert_eq!(flows.initial(), -1000.0);
/// assert_eq!(flows.total(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CashFlowSeries {
    amounts: Vec<f64>,
}

impl CashFlowSeries {
    /// Creates a series from per-period amounts.
    ///
    /// Fails when the series is empty or holds a non-finite amount.
    pub fn new(amounts: Vec<f64>) -> CoreResult<Self> {
        if amounts.is_empty() {
            return Err(CoreError::invalid_cash_flow(
                "at least one cash flow is required",
            ));
        }
        if let Some(t) = amounts.iter().position(|cf| !cf.is_finite()) {
            return Err(CoreError::invalid_cash_flow(format!(
                "cash flow at period {t} is not a finite number"
            )));
        }
        Ok(Self { amounts })
    }

    /// Parses a comma-separated list such as `"-1000, 300, 400, 500"`.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let amounts = input
            .split(',')
            .map(|item| {
                let item = item.trim();
                item.parse::<f64>()
                    .map_err(|e| CoreError::invalid_number(item, e.to_string()))
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Self::new(amounts)
    }

    /// Returns the amounts in period order.
    #[must_use]
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Number of periods, including period 0.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Always false; a series holds at least one period.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// The period 0 amount.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.amounts[0]
    }

    /// Undiscounted sum of all periods.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Iterates over `(period, amount)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.amounts.iter().copied().enumerate()
    }
}

impl TryFrom<Vec<f64>> for CashFlowSeries {
    type Error = CoreError;

    fn try_from(amounts: Vec<f64>) -> CoreResult<Self> {
        Self::new(amounts)
    }
}

impl From<CashFlowSeries> for Vec<f64> {
    fn from(series: CashFlowSeries) -> Self {
        series.amounts
    }
}

impl FromStr for CashFlowSeries {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CashFlowSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.amounts.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_spaces() {
        let flows = CashFlowSeries::parse("-1000, 300,400 ,  500").unwrap();
        assert_eq!(flows.amounts(), &[-1000.0, 300.0, 400.0, 500.0]);
        assert_eq!(flows.len(), 4);
        assert!(!flows.is_empty());
    }

    #[test]
    fn test_single_period_is_valid() {
        let flows = CashFlowSeries::new(vec![0.0]).unwrap();
        assert_eq!(flows.len(), 1);
        assert_eq!(flows.total(), 0.0);
    }

    #[test]
    fn test_empty_rejected() {
        let err = CashFlowSeries::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCashFlow { .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = CashFlowSeries::new(vec![-100.0, f64::NAN]).unwrap_err();
        assert!(err.to_string().contains("period 1"));
    }

    #[test]
    fn test_parse_garbage() {
        let err = "-1000, abc".parse::<CashFlowSeries>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidNumber { ref input, .. } if input == "abc"));

        let err = CashFlowSeries::parse("").unwrap_err();
        assert!(matches!(err, CoreError::InvalidNumber { .. }));
    }

    #[test]
    fn test_iter_periods() {
        let flows = CashFlowSeries::parse("-10, 4, 8").unwrap();
        let periods: Vec<_> = flows.iter().collect();
        assert_eq!(periods, vec![(0, -10.0), (1, 4.0), (2, 8.0)]);
        assert_eq!(flows.to_string(), "[-10, 4, 8]");
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let flows: CashFlowSeries = serde_json::from_str("[-5.0, 6.0]").unwrap();
        assert_eq!(flows.initial(), -5.0);
        assert!(serde_json::from_str::<CashFlowSeries>("[]").is_err());
    }
}
