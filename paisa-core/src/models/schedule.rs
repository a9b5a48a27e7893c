use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors that can occur when assembling a [`TaxSchedule`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule contains no brackets.
    #[error("schedule has no brackets")]
    Empty,

    /// The first bracket must start at zero income.
    #[error("first bracket must start at zero, got {0}")]
    NonZeroStart(Decimal),

    /// A bracket's ceiling is at or below its floor.
    #[error("bracket {index} has ceiling {ceiling} at or below floor {floor}")]
    EmptyRange {
        index: usize,
        floor: Decimal,
        ceiling: Decimal,
    },

    /// A bracket does not start where the previous one ends.
    #[error("bracket {index} starts at {floor}, expected {expected}")]
    Gap {
        index: usize,
        floor: Decimal,
        expected: Decimal,
    },

    /// Only the last bracket may leave its ceiling open.
    #[error("bracket {0} is open-ended but is not the last bracket")]
    OpenEndedNotLast(usize),

    /// The last bracket must leave its ceiling open.
    #[error("last bracket must be open-ended")]
    BoundedTail,

    /// A marginal rate outside [0, 1].
    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    InvalidRate { index: usize, rate: Decimal },

    /// A base tax inconsistent with the accumulated lower slabs, which
    /// would make the schedule discontinuous at a slab boundary.
    #[error("bracket {index} base tax {found} breaks continuity, expected {expected}")]
    DiscontinuousBaseTax {
        index: usize,
        found: Decimal,
        expected: Decimal,
    },
}

/// An ordered, validated progressive tax schedule.
///
/// Construction checks that the brackets start at zero, are contiguous with
/// strictly increasing bounds, end with an open-ended slab, carry rates in
/// [0, 1], and have `base_tax` values equal to the accumulated tax of the
/// slabs below them. A validated schedule therefore describes a continuous,
/// monotonically non-decreasing function of income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        if brackets.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let first = &brackets[0];
        if !first.floor.is_zero() {
            return Err(ScheduleError::NonZeroStart(first.floor));
        }

        let mut expected_floor = Decimal::ZERO;
        let mut expected_base = Decimal::ZERO;
        let last = brackets.len() - 1;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate {
                    index,
                    rate: bracket.rate,
                });
            }
            if bracket.floor != expected_floor {
                return Err(ScheduleError::Gap {
                    index,
                    floor: bracket.floor,
                    expected: expected_floor,
                });
            }
            if bracket.base_tax != expected_base {
                return Err(ScheduleError::DiscontinuousBaseTax {
                    index,
                    found: bracket.base_tax,
                    expected: expected_base,
                });
            }

            match bracket.ceiling {
                Some(ceiling) => {
                    if index == last {
                        return Err(ScheduleError::BoundedTail);
                    }
                    if ceiling <= bracket.floor {
                        return Err(ScheduleError::EmptyRange {
                            index,
                            floor: bracket.floor,
                            ceiling,
                        });
                    }
                    expected_base += (ceiling - bracket.floor) * bracket.rate;
                    expected_floor = ceiling;
                }
                None => {
                    if index != last {
                        return Err(ScheduleError::OpenEndedNotLast(index));
                    }
                }
            }
        }

        Ok(Self { brackets })
    }

    /// Indian new-regime slabs for FY 2025-26.
    ///
    /// | Annual income (₹) | Marginal rate |
    /// |-------------------|---------------|
    /// | up to 3,00,000    | 0%            |
    /// | up to 7,00,000    | 5%            |
    /// | up to 10,00,000   | 10%           |
    /// | up to 12,00,000   | 15%           |
    /// | up to 15,00,000   | 20%           |
    /// | above 15,00,000   | 30%           |
    pub fn fy_2025_26() -> Self {
        // Known-good constants; shape is asserted against `new` in tests.
        Self {
            brackets: vec![
                TaxBracket {
                    floor: Decimal::ZERO,
                    ceiling: Some(Decimal::from(300_000)),
                    rate: Decimal::ZERO,
                    base_tax: Decimal::ZERO,
                },
                TaxBracket {
                    floor: Decimal::from(300_000),
                    ceiling: Some(Decimal::from(700_000)),
                    rate: Decimal::new(5, 2),
                    base_tax: Decimal::ZERO,
                },
                TaxBracket {
                    floor: Decimal::from(700_000),
                    ceiling: Some(Decimal::from(1_000_000)),
                    rate: Decimal::new(10, 2),
                    base_tax: Decimal::from(20_000),
                },
                TaxBracket {
                    floor: Decimal::from(1_000_000),
                    ceiling: Some(Decimal::from(1_200_000)),
                    rate: Decimal::new(15, 2),
                    base_tax: Decimal::from(50_000),
                },
                TaxBracket {
                    floor: Decimal::from(1_200_000),
                    ceiling: Some(Decimal::from(1_500_000)),
                    rate: Decimal::new(20, 2),
                    base_tax: Decimal::from(80_000),
                },
                TaxBracket {
                    floor: Decimal::from(1_500_000),
                    ceiling: None,
                    rate: Decimal::new(30, 2),
                    base_tax: Decimal::from(140_000),
                },
            ],
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}
