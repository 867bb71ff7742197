//! Shared helpers for due-date arithmetic.

use rust_decimal::Decimal;

/// Rounds a fractional day count to the nearest whole day, half away from
/// zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use maintlog_core::calculations::common::round_whole_days;
///
/// assert_eq!(round_whole_days(dec!(4.4)), dec!(4));
/// assert_eq!(round_whole_days(dec!(4.5)), dec!(5));
/// assert_eq!(round_whole_days(dec!(5.0)), dec!(5));
/// ```
pub fn round_whole_days(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_whole_days_rounds_down_below_midpoint() {
        assert_eq!(round_whole_days(dec!(12.49)), dec!(12));
    }

    #[test]
    fn round_whole_days_rounds_up_at_midpoint() {
        assert_eq!(round_whole_days(dec!(12.5)), dec!(13));
    }

    #[test]
    fn round_whole_days_preserves_whole_values() {
        assert_eq!(round_whole_days(dec!(5)), dec!(5));
    }

    #[test]
    fn round_whole_days_handles_zero() {
        assert_eq!(round_whole_days(dec!(0)), dec!(0));
    }

    #[test]
    fn round_whole_days_handles_large_values() {
        assert_eq!(round_whole_days(dec!(99999.9)), dec!(100000));
    }
}
