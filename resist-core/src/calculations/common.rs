//! Shared helpers for the derivation pipeline.

use rust_decimal::Decimal;

/// Clamps a value to zero from below.
///
/// Taxable income, tax after credits, overpayment, and the scenario
/// figures are all floored this way: a deduction or credit can wipe an
/// amount out, but never drive it negative.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use resist_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(1234.56)), dec!(1234.56));
/// assert_eq!(floor_at_zero(dec!(-1234.56)), dec!(0));
/// assert_eq!(floor_at_zero(dec!(0)), dec!(0));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
