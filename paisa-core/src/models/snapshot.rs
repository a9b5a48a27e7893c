use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category amounts for one evaluation period, in presentation order.
///
/// Order is significant: color assignment and percent listings follow the
/// order categories were added in, so this is an ordered sequence rather
/// than a map. A snapshot is rebuilt from the current inputs on every
/// evaluation; it has no identity across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    total_income: Decimal,
    categories: Vec<(String, Decimal)>,
}

impl FinancialSnapshot {
    pub fn new(total_income: Decimal) -> Self {
        Self {
            total_income,
            categories: Vec::new(),
        }
    }

    /// Appends a category, preserving insertion order.
    pub fn push(
        &mut self,
        label: impl Into<String>,
        amount: Decimal,
    ) {
        self.categories.push((label.into(), amount));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_category(
        mut self,
        label: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        self.push(label, amount);
        self
    }

    pub fn total_income(&self) -> Decimal {
        self.total_income
    }

    pub fn categories(&self) -> &[(String, Decimal)] {
        &self.categories
    }
}
