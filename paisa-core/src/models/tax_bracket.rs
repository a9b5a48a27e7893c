use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slab of a progressive tax schedule.
///
/// A bracket covers annual incomes in `(floor, ceiling]`; the last bracket
/// of a schedule leaves `ceiling` open. `base_tax` is the fixed tax owed on
/// every fully filled lower slab, which keeps the schedule continuous at
/// slab boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub floor: Decimal,
    pub ceiling: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}
