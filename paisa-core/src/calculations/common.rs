//! Common utility functions shared across the calculation modules.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding, the standard financial convention (0.005 rounds away from
/// zero to 0.01).
///
/// Core figures stay unrounded; this is for display boundaries.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paisa_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value to the non-negative range.
///
/// Finance figures are treated as non-negative throughout; negative inputs
/// normalize to zero rather than propagating.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}
