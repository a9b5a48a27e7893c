//! Monthly budget overview worksheet.
//!
//! Derives the figures the original form computes on every interaction,
//! as one explicit recomputation step over the current inputs:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | PF contribution: monthly income × PF percentage / 100 |
//! | 2    | Annual income: monthly income × 12 |
//! | 3    | Annual tax from the slab schedule |
//! | 4    | Monthly tax: annual tax / 12 |
//! | 5    | Total expenses: rent + food + transport + PF + investments + other + monthly tax |
//! | 6    | Net savings: monthly income − total expenses (may be negative) |
//!
//! The worksheet holds no state between calls; callers re-run it whenever
//! an input changes.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paisa_core::TaxSchedule;
//! use paisa_core::calculations::{MonthlyInputs, OverviewWorksheet};
//!
//! let schedule = TaxSchedule::fy_2025_26();
//! let worksheet = OverviewWorksheet::new(&schedule);
//!
//! let inputs = MonthlyInputs {
//!     monthly_income: dec!(100000),
//!     rent: dec!(25000),
//!     food: dec!(10000),
//!     transport: dec!(5000),
//!     pf_percent: dec!(12),
//!     investment: dec!(15000),
//!     other_expenses: dec!(5000),
//! };
//!
//! let overview = worksheet.calculate(&inputs).unwrap();
//!
//! assert_eq!(overview.pf_contribution, dec!(12000));
//! assert_eq!(overview.annual_income, dec!(1200000));
//! assert_eq!(overview.annual_tax, dec!(80000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::income_tax::{IncomeTaxError, TaxEstimator};
use crate::models::{FinancialSnapshot, TaxSchedule};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Errors that can occur when deriving the monthly overview.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverviewError {
    /// A money input below zero.
    #[error("{field} must be non-negative, got {value}")]
    NegativeInput { field: &'static str, value: Decimal },

    /// PF percentage outside the 0-100 range the form allows.
    #[error("PF percentage must be between 0 and 100, got {0}")]
    PfPercentOutOfRange(Decimal),

    /// The slab estimate failed.
    #[error("tax estimation failed: {0}")]
    Tax(#[from] IncomeTaxError),
}

/// The seven numeric fields collected by the form, all monthly figures
/// except `pf_percent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyInputs {
    pub monthly_income: Decimal,
    pub rent: Decimal,
    pub food: Decimal,
    pub transport: Decimal,
    /// Provident fund contribution as a percentage of income (0-100).
    pub pf_percent: Decimal,
    pub investment: Decimal,
    pub other_expenses: Decimal,
}

/// Figures derived from one run of the worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyOverview {
    /// PF contribution in currency terms.
    pub pf_contribution: Decimal,

    /// Annualized income fed to the slab schedule.
    pub annual_income: Decimal,

    /// Tax owed for the full year.
    pub annual_tax: Decimal,

    /// Annual tax spread evenly across twelve months.
    pub monthly_tax: Decimal,

    /// Every outflow including PF and monthly tax.
    pub total_expenses: Decimal,

    /// Monthly income minus total expenses. Negative when the user spends
    /// more than they earn; the breakdown normalizer clamps it for display.
    pub net_savings: Decimal,
}

/// Calculator for the monthly overview.
#[derive(Debug, Clone)]
pub struct OverviewWorksheet<'a> {
    estimator: TaxEstimator<'a>,
}

impl<'a> OverviewWorksheet<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self {
            estimator: TaxEstimator::new(schedule),
        }
    }

    /// Derives the overview figures from validated inputs.
    ///
    /// # Errors
    ///
    /// Returns [`OverviewError`] when any money field is negative or the
    /// PF percentage leaves the 0-100 range.
    pub fn calculate(
        &self,
        inputs: &MonthlyInputs,
    ) -> Result<MonthlyOverview, OverviewError> {
        Self::validate(inputs)?;

        let pf_contribution = inputs.monthly_income * inputs.pf_percent / Decimal::ONE_HUNDRED;
        let annual_income = inputs.monthly_income * MONTHS_PER_YEAR;
        let annual_tax = self.estimator.tax_for(annual_income)?;
        let monthly_tax = annual_tax / MONTHS_PER_YEAR;

        let total_expenses = inputs.rent
            + inputs.food
            + inputs.transport
            + pf_contribution
            + inputs.investment
            + inputs.other_expenses
            + monthly_tax;

        let net_savings = inputs.monthly_income - total_expenses;

        Ok(MonthlyOverview {
            pf_contribution,
            annual_income,
            annual_tax,
            monthly_tax,
            total_expenses,
            net_savings,
        })
    }

    fn validate(inputs: &MonthlyInputs) -> Result<(), OverviewError> {
        let money_fields = [
            ("monthly income", inputs.monthly_income),
            ("rent", inputs.rent),
            ("food", inputs.food),
            ("transport", inputs.transport),
            ("investment", inputs.investment),
            ("other expenses", inputs.other_expenses),
        ];
        for (field, value) in money_fields {
            if value < Decimal::ZERO {
                return Err(OverviewError::NegativeInput { field, value });
            }
        }
        if inputs.pf_percent < Decimal::ZERO || inputs.pf_percent > Decimal::ONE_HUNDRED {
            return Err(OverviewError::PfPercentOutOfRange(inputs.pf_percent));
        }
        Ok(())
    }
}

impl MonthlyOverview {
    /// Assembles the ordered category snapshot the breakdown chart renders,
    /// with total income as the declared total.
    ///
    /// Category order matches the original form and is what pins each
    /// category to its palette color.
    pub fn snapshot(
        &self,
        inputs: &MonthlyInputs,
    ) -> FinancialSnapshot {
        FinancialSnapshot::new(inputs.monthly_income)
            .with_category("Rent", inputs.rent)
            .with_category("Food", inputs.food)
            .with_category("Transport", inputs.transport)
            .with_category("PF", self.pf_contribution)
            .with_category("Investments", inputs.investment)
            .with_category("Other Expenses", inputs.other_expenses)
            .with_category("Tax", self.monthly_tax)
            .with_category("Savings", self.net_savings)
    }
}
