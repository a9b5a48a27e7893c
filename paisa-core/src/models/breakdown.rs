use rust_decimal::Decimal;
use serde::Serialize;

/// Fixed palette cycled by slice position.
///
/// Color assignment is positional (`CHART_PALETTE[i % 10]`), so the same
/// ordered input always produces the same color sequence.
pub const CHART_PALETTE: [&str; 10] = [
    "#FF6B6B", "#4D96FF", "#6BCB77", "#FFD93D", "#A66DD4",
    "#FF922B", "#20C997", "#845EC2", "#2C73D2", "#008F7A",
];

/// Label of the placeholder slice emitted when there is nothing to chart.
pub const NO_DATA_LABEL: &str = "No data";

/// One renderable slice of a proportional breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownSlice {
    pub label: String,
    /// Clamped amount; 1.0 is a sentinel on the placeholder slice, not a
    /// currency value.
    pub amount: Decimal,
    /// Share of the series, as an unrounded percentage. Display precision
    /// is the renderer's concern.
    pub percent: Decimal,
    pub color: &'static str,
}

/// Normalized, percentage- and color-annotated category amounts, ready for
/// proportional-chart rendering. Never empty: a zero total degenerates to a
/// single [`NO_DATA_LABEL`] slice at 100%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownSeries {
    pub slices: Vec<BreakdownSlice>,
}

impl BreakdownSeries {
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
