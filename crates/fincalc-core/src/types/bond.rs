//! Plain annual-coupon bond description.

use serde::{Deserialize, Serialize};

use super::rate::{from_percent, Rate};
use crate::error::{CoreError, CoreResult};

/// Longest maturity accepted, in annual periods.
pub const MAX_YEARS_TO_MATURITY: u32 = 1_000;

/// The inputs that imply a bond's cash flows.
///
/// A coupon of `face_value * coupon_rate` is paid at the end of each of
/// `years_to_maturity` periods and the face value is repaid with the last
/// coupon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BondFields")]
pub struct BondSpec {
    face_value: f64,
    coupon_rate: Rate,
    years_to_maturity: u32,
}

impl BondSpec {
    /// Creates a bond from a fractional coupon rate.
    ///
    /// Requires a positive face value, a non-negative coupon rate and
    /// between one and [`MAX_YEARS_TO_MATURITY`] years to maturity.
    pub fn new(face_value: f64, coupon_rate: Rate, years_to_maturity: u32) -> CoreResult<Self> {
        if !face_value.is_finite() || face_value <= 0.0 {
            return Err(CoreError::invalid_bond_spec(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        if !coupon_rate.is_finite() || coupon_rate < 0.0 {
            return Err(CoreError::invalid_bond_spec(format!(
                "coupon rate must be non-negative, got {coupon_rate}"
            )));
        }
        if years_to_maturity == 0 || years_to_maturity > MAX_YEARS_TO_MATURITY {
            return Err(CoreError::invalid_bond_spec(format!(
                "years to maturity must be between 1 and {MAX_YEARS_TO_MATURITY}, \
                 got {years_to_maturity}"
            )));
        }
        Ok(Self {
            face_value,
            coupon_rate,
            years_to_maturity,
        })
    }

    /// Creates a bond from a coupon rate quoted in percent (5.0 for 5%).
    pub fn from_percent(
        face_value: f64,
        coupon_rate_percent: f64,
        years_to_maturity: u32,
    ) -> CoreResult<Self> {
        Self::new(face_value, from_percent(coupon_rate_percent), years_to_maturity)
    }

    /// Face (par) value repaid at maturity.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Coupon rate as a fraction.
    #[must_use]
    pub fn coupon_rate(&self) -> Rate {
        self.coupon_rate
    }

    /// Number of annual coupon periods.
    #[must_use]
    pub fn years_to_maturity(&self) -> u32 {
        self.years_to_maturity
    }

    /// Number of periods as a discounting exponent.
    #[must_use]
    pub fn periods(&self) -> i32 {
        // Bounded by MAX_YEARS_TO_MATURITY on construction.
        i32::try_from(self.years_to_maturity).unwrap_or(i32::MAX)
    }

    /// Coupon paid each period.
    #[must_use]
    pub fn coupon_payment(&self) -> f64 {
        self.face_value * self.coupon_rate
    }

    /// Amount received in period `t` (1-based); zero outside `1..=n`.
    #[must_use]
    pub fn cash_flow_at(&self, t: u32) -> f64 {
        match t {
            0 => 0.0,
            t if t < self.years_to_maturity => self.coupon_payment(),
            t if t == self.years_to_maturity => self.coupon_payment() + self.face_value,
            _ => 0.0,
        }
    }
}

/// Unvalidated field set; deserialized bonds go through [`BondSpec::new`].
#[derive(Deserialize)]
struct BondFields {
    face_value: f64,
    coupon_rate: Rate,
    years_to_maturity: u32,
}

impl TryFrom<BondFields> for BondSpec {
    type Error = CoreError;

    fn try_from(fields: BondFields) -> CoreResult<Self> {
        Self::new(fields.face_value, fields.coupon_rate, fields.years_to_maturity)
    }
}
