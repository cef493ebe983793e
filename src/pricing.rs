//! Pricing

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Converts an amount in minor units of `currency` into displayable money.
///
/// Amounts are kept as unsigned minor units everywhere in the planner; this is the only place
/// they become [`Money`], so the currency's exponent is applied here.
pub fn money(minor_units: u64, currency: &'static Currency) -> Money<'static, Currency> {
    let amount = Decimal::from_i128_with_scale(i128::from(minor_units), currency.exponent);

    Money::from_decimal(amount, currency)
}

/// Formats an amount in minor units with the currency symbol and thousands separators.
pub fn format_money(minor_units: u64, currency: &'static Currency) -> String {
    format!("{}", money(minor_units, currency))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, JPY};

    use super::*;

    #[test]
    fn yen_has_no_minor_unit_scaling() {
        assert_eq!(money(6780, JPY), Money::from_major(6780, JPY));
    }

    #[test]
    fn pence_are_scaled_to_pounds() {
        assert_eq!(money(299, GBP), Money::from_minor(299, GBP));
    }

    #[test]
    fn formatted_amounts_group_thousands() {
        let formatted = format_money(31_656, JPY);

        assert!(formatted.contains("31,656"), "got {formatted}");
    }

    #[test]
    fn zero_formats_without_separator() {
        let formatted = format_money(0, JPY);

        assert!(formatted.ends_with('0'), "got {formatted}");
        assert!(!formatted.contains(','), "got {formatted}");
    }
}
