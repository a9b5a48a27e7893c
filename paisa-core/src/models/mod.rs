mod breakdown;
mod schedule;
mod snapshot;
mod tax_bracket;

pub use breakdown::{BreakdownSeries, BreakdownSlice, CHART_PALETTE, NO_DATA_LABEL};
pub use schedule::{ScheduleError, TaxSchedule};
pub use snapshot::FinancialSnapshot;
pub use tax_bracket::TaxBracket;
