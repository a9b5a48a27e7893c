//! Normalization of category amounts into a renderable breakdown series.
//!
//! The normalizer never fails: negative amounts and a negative total are
//! clamped to zero, and a zero total degenerates to a single placeholder
//! slice so a renderer always receives something drawable.
//!
//! Percentages are computed against the clamped amount sum, so the emitted
//! shares always add up to 100 whenever anything survives clamping, even if
//! the declared total disagrees with the data. The declared total only
//! decides the degenerate path.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::clamp_non_negative;
use crate::models::{BreakdownSeries, BreakdownSlice, CHART_PALETTE, FinancialSnapshot, NO_DATA_LABEL};

/// Normalizes a snapshot into an ordered, color-annotated series.
///
/// Output guarantees:
/// - series length equals the category count, or 1 on the placeholder path;
/// - every percent is non-negative and unrounded;
/// - percents sum to 100 whenever any clamped amount is positive;
/// - colors cycle the fixed palette by position, so identical ordered input
///   yields an identical color sequence.
pub fn normalize(snapshot: &FinancialSnapshot) -> BreakdownSeries {
    let total = snapshot.total_income();
    if total < Decimal::ZERO {
        warn!(%total, "negative total income clamped to zero");
    }

    if clamp_non_negative(total).is_zero() {
        return placeholder_series();
    }

    let amounts: Vec<Decimal> = snapshot
        .categories()
        .iter()
        .map(|(label, amount)| {
            if *amount < Decimal::ZERO {
                warn!(category = %label, %amount, "negative category amount clamped to zero");
            }
            clamp_non_negative(*amount)
        })
        .collect();

    let basis: Decimal = amounts.iter().sum();

    let slices = snapshot
        .categories()
        .iter()
        .zip(&amounts)
        .enumerate()
        .map(|(index, ((label, _), &amount))| BreakdownSlice {
            label: label.clone(),
            amount,
            percent: share_of(amount, basis),
            color: CHART_PALETTE[index % CHART_PALETTE.len()],
        })
        .collect();

    BreakdownSeries { slices }
}

fn share_of(
    amount: Decimal,
    basis: Decimal,
) -> Decimal {
    if basis.is_zero() {
        Decimal::ZERO
    } else {
        amount / basis * Decimal::ONE_HUNDRED
    }
}

fn placeholder_series() -> BreakdownSeries {
    BreakdownSeries {
        slices: vec![BreakdownSlice {
            label: NO_DATA_LABEL.to_string(),
            amount: Decimal::ONE,
            percent: Decimal::ONE_HUNDRED,
            color: CHART_PALETTE[0],
        }],
    }
}
