//! Money bounds for account balances and debts.
//!
//! All amounts use `rust_decimal::Decimal` with 2-decimal (cent) semantics.
//! Floats never touch a balance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Upper bound for any balance or debt at rest.
pub const MAX_BALANCE: Decimal = dec!(999999.99);

/// Smallest amount an operation will accept.
pub const MIN_AMOUNT: Decimal = dec!(0.01);

/// Largest loan principal a single loan may carry.
pub const MAX_LOAN: Decimal = dec!(50000.00);

/// True if `value` is expressible in whole cents.
pub fn has_cent_precision(value: Decimal) -> bool {
    value == value.round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cent_precision_accepts_two_decimals() {
        assert!(has_cent_precision(dec!(10.25)));
        assert!(has_cent_precision(dec!(10)));
        assert!(has_cent_precision(dec!(10.10)));
    }

    #[test]
    fn cent_precision_rejects_sub_cent() {
        assert!(!has_cent_precision(dec!(10.005)));
        assert!(!has_cent_precision(dec!(0.001)));
    }
}
