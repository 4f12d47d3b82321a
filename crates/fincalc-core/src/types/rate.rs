//! Rate representation.

/// A periodic rate as a fraction (0.05 = 5%). Never a percentage.
pub type Rate = f64;

/// Converts a percentage (5.0) into a fraction (0.05).
#[inline]
#[must_use]
pub fn from_percent(percent: f64) -> Rate {
    percent / 100.0
}

/// Converts a fraction (0.05) into a percentage (5.0).
#[inline]
#[must_use]
pub fn to_percent(rate: Rate) -> f64 {
    rate * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_conversions() {
        assert_relative_eq!(from_percent(5.0), 0.05);
        assert_relative_eq!(to_percent(0.0725), 7.25);
        assert_relative_eq!(to_percent(from_percent(-99.0)), -99.0);
    }
}
