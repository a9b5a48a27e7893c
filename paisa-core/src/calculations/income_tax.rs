//! Progressive income tax over a validated slab schedule.
//!
//! Tax owed is the filled lower slabs' fixed contribution plus the current
//! slab's marginal rate applied to the remainder above that slab's floor.
//! A slab covers incomes in `(floor, ceiling]`, so an income exactly at a
//! boundary is taxed in the lower slab; with the `base_tax` continuity
//! enforced by [`TaxSchedule`] the result is a continuous, piecewise-linear,
//! monotonically non-decreasing function of income.
//!
//! The result is exact: no rounding is applied, so crossing a slab boundary
//! by the smallest representable amount strictly increases the tax whenever
//! the upper slab has a positive rate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paisa_core::TaxSchedule;
//! use paisa_core::calculations::TaxEstimator;
//!
//! let schedule = TaxSchedule::fy_2025_26();
//! let estimator = TaxEstimator::new(&schedule);
//!
//! assert_eq!(estimator.tax_for(dec!(300000)).unwrap(), dec!(0));
//! assert_eq!(estimator.tax_for(dec!(700000)).unwrap(), dec!(20000));
//! assert_eq!(estimator.tax_for(dec!(1000000)).unwrap(), dec!(50000));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::TaxSchedule;

/// Errors that can occur when estimating income tax.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxError {
    /// Negative income is not a domain value; callers must clamp or reject
    /// upstream if they want different behavior.
    #[error("annual income must be non-negative, got {0}")]
    NegativeIncome(Decimal),

    /// No slab covers the given income. Unreachable for a schedule built
    /// through [`TaxSchedule::new`], which enforces full coverage.
    #[error("no slab found for annual income {0}")]
    NoMatchingBracket(Decimal),
}

/// Calculator for progressive income tax over a slab schedule.
#[derive(Debug, Clone)]
pub struct TaxEstimator<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> TaxEstimator<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Estimates the tax owed on a non-negative annual income.
    ///
    /// Total over the non-negative domain; returns exactly zero for any
    /// income within the zero-rate slab.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxError::NegativeIncome`] for negative input.
    pub fn tax_for(
        &self,
        annual_income: Decimal,
    ) -> Result<Decimal, IncomeTaxError> {
        if annual_income < Decimal::ZERO {
            return Err(IncomeTaxError::NegativeIncome(annual_income));
        }
        if annual_income.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let bracket = self
            .schedule
            .brackets()
            .iter()
            .find(|b| {
                annual_income > b.floor
                    && b.ceiling.is_none_or(|ceiling| annual_income <= ceiling)
            })
            .ok_or(IncomeTaxError::NoMatchingBracket(annual_income))?;

        let marginal_income = annual_income - bracket.floor;

        Ok(bracket.base_tax + marginal_income * bracket.rate)
    }
}
