//! Boundary formatting: rupee strings, the calculated summary, and a text
//! rendering of the breakdown series.
//!
//! Currency formatting happens here, never in the core; the core hands out
//! unrounded decimals and this module decides display precision.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use paisa_assistant::FinancialSummary;
use paisa_core::calculations::common::round_half_up;
use paisa_core::calculations::{MonthlyInputs, MonthlyOverview};
use paisa_core::models::BreakdownSeries;

const BAR_WIDTH: u32 = 40;

/// Formats an amount as `₹{amount:.2}`.
pub fn rupees(amount: Decimal) -> String {
    format!("₹{:.2}", round_half_up(amount))
}

/// The calculated summary, in the order the original form displays it.
///
/// The PF line carries the percentage annotation alongside the currency
/// amount. This same summary is embedded verbatim in the provider prompt.
pub fn financial_summary(
    inputs: &MonthlyInputs,
    overview: &MonthlyOverview,
) -> FinancialSummary {
    let mut summary = FinancialSummary::default();
    summary.push("Monthly Income", rupees(inputs.monthly_income));
    summary.push(
        "Provident Fund (PF)",
        format!(
            "{} ({}%)",
            rupees(overview.pf_contribution),
            inputs.pf_percent
        ),
    );
    summary.push("Income Tax (Monthly)", rupees(overview.monthly_tax));
    summary.push("Investments", rupees(inputs.investment));
    summary.push("Other Expenses", rupees(inputs.other_expenses));
    summary.push("Total Expenses", rupees(overview.total_expenses));
    summary.push("Net Savings", rupees(overview.net_savings));
    summary
}

/// Summary entries as display lines.
pub fn summary_lines(summary: &FinancialSummary) -> Vec<String> {
    summary
        .entries()
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect()
}

/// Renders the series as one proportional bar line per slice.
pub fn render_series(
    series: &BreakdownSeries,
    color: bool,
) -> String {
    let mut out = String::new();
    for slice in &series.slices {
        let percent = slice
            .percent
            .round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        let bar = "█".repeat(bar_cells(slice.percent));
        let bar = match rgb(slice.color) {
            Some((r, g, b)) if color => format!("\x1b[38;2;{r};{g};{b}m{bar}\x1b[0m"),
            _ => bar,
        };
        let _ = writeln!(
            out,
            "{label:<16} {amount:>12} {percent:>5.1}%  {bar}",
            label = slice.label,
            amount = rupees(slice.amount),
        );
    }
    out
}

/// Number of bar cells for a percentage of [`BAR_WIDTH`].
fn bar_cells(percent: Decimal) -> usize {
    (percent * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH as usize)
}

/// Parses a `#RRGGBB` palette entry.
fn rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use paisa_core::TaxSchedule;
    use paisa_core::calculations::{OverviewWorksheet, normalize};

    use super::*;

    fn test_inputs() -> MonthlyInputs {
        MonthlyInputs {
            monthly_income: dec!(100000),
            rent: dec!(25000),
            food: dec!(10000),
            transport: dec!(5000),
            pf_percent: dec!(12),
            investment: dec!(15000),
            other_expenses: dec!(5000),
        }
    }

    // =========================================================================
    // rupees tests
    // =========================================================================

    #[test]
    fn rupees_pads_whole_amounts_to_two_decimals() {
        assert_eq!(rupees(dec!(100000)), "₹100000.00");
    }

    #[test]
    fn rupees_rounds_half_up() {
        assert_eq!(rupees(dec!(1666.665)), "₹1666.67");
    }

    // =========================================================================
    // summary tests
    // =========================================================================

    #[test]
    fn summary_follows_the_form_order_and_annotates_pf() {
        let schedule = TaxSchedule::fy_2025_26();
        let worksheet = OverviewWorksheet::new(&schedule);
        let inputs = test_inputs();
        let overview = worksheet.calculate(&inputs).unwrap();

        let summary = financial_summary(&inputs, &overview);
        let labels: Vec<&str> = summary
            .entries()
            .iter()
            .map(|(label, _)| label.as_str())
            .collect();

        assert_eq!(
            labels,
            vec![
                "Monthly Income",
                "Provident Fund (PF)",
                "Income Tax (Monthly)",
                "Investments",
                "Other Expenses",
                "Total Expenses",
                "Net Savings",
            ]
        );
        assert_eq!(summary.entries()[1].1, "₹12000.00 (12%)");
    }

    #[test]
    fn summary_lines_join_label_and_value() {
        let mut summary = FinancialSummary::default();
        summary.push("Monthly Income", "₹100000.00");

        assert_eq!(summary_lines(&summary), vec!["Monthly Income: ₹100000.00"]);
    }

    // =========================================================================
    // series rendering tests
    // =========================================================================

    #[test]
    fn render_series_emits_one_line_per_slice() {
        let schedule = TaxSchedule::fy_2025_26();
        let worksheet = OverviewWorksheet::new(&schedule);
        let inputs = test_inputs();
        let overview = worksheet.calculate(&inputs).unwrap();
        let series = normalize(&overview.snapshot(&inputs));

        let rendered = render_series(&series, false);

        assert_eq!(rendered.lines().count(), series.len());
        assert!(rendered.contains("Rent"));
        assert!(rendered.contains("25.0%"));
    }

    #[test]
    fn render_series_without_color_has_no_escape_codes() {
        let schedule = TaxSchedule::fy_2025_26();
        let worksheet = OverviewWorksheet::new(&schedule);
        let inputs = test_inputs();
        let overview = worksheet.calculate(&inputs).unwrap();
        let series = normalize(&overview.snapshot(&inputs));

        let rendered = render_series(&series, false);

        assert!(!rendered.contains('\x1b'));
    }

    #[test]
    fn bar_cells_scale_with_percent() {
        assert_eq!(bar_cells(dec!(0)), 0);
        assert_eq!(bar_cells(dec!(50)), 20);
        assert_eq!(bar_cells(dec!(100)), 40);
        // A percent above 100 still fits the bar.
        assert_eq!(bar_cells(dec!(150)), 40);
    }

    #[test]
    fn rgb_parses_palette_entries() {
        assert_eq!(rgb("#FF6B6B"), Some((0xFF, 0x6B, 0x6B)));
        assert_eq!(rgb("#008F7A"), Some((0x00, 0x8F, 0x7A)));
        assert_eq!(rgb("nonsense"), None);
    }
}
