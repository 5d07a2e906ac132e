//! Amount rendering for the `am` parameter

use rust_decimal::{Decimal, RoundingStrategy};

/// Render an amount with exactly two fractional digits.
///
/// Rounds half away from zero at the second decimal place. No grouping
/// separators, no currency symbol, `.` as the decimal point.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    // rescale stops short when the mantissa has no headroom left
    let mut rendered = rounded.to_string();
    match rounded.scale() {
        0 => rendered.push_str(".00"),
        1 => rendered.push('0'),
        _ => {}
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pads_to_two_digits() {
        assert_eq!(format_amount(Decimal::from(500)), "500.00");
        assert_eq!(format_amount(dec("12.5")), "12.50");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec("1.005")), "1.01");
        assert_eq!(format_amount(dec("1.004")), "1.00");
        assert_eq!(format_amount(dec("2.675")), "2.68");
        assert_eq!(format_amount(dec("-1.005")), "-1.01");
    }

    #[test]
    fn test_full_mantissa_keeps_two_digits() {
        assert_eq!(format_amount(Decimal::MAX), "79228162514264337593543950335.00");
        assert_eq!(format_amount(Decimal::MIN), "-79228162514264337593543950335.00");

        let one_digit = Decimal::from_i128_with_scale(79_228_162_514_264_337_593_543_950_335, 1);
        assert_eq!(format_amount(one_digit), "7922816251426433759354395033.50");
    }

    #[test]
    fn test_no_grouping() {
        assert_eq!(format_amount(dec("1234567.891")), "1234567.89");
    }
}
