//! End-to-end pipeline: inputs → overview → snapshot → breakdown series.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use paisa_core::TaxSchedule;
use paisa_core::calculations::{MonthlyInputs, OverviewWorksheet, normalize};
use paisa_core::models::{CHART_PALETTE, NO_DATA_LABEL};

fn sample_inputs() -> MonthlyInputs {
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

#[test]
fn full_pipeline_produces_a_complete_series() {
    let schedule = TaxSchedule::fy_2025_26();
    let worksheet = OverviewWorksheet::new(&schedule);
    let inputs = sample_inputs();

    let overview = worksheet.calculate(&inputs).unwrap();
    let series = normalize(&overview.snapshot(&inputs));

    assert_eq!(series.len(), 8);

    let percent_sum: Decimal = series.slices.iter().map(|s| s.percent).sum();
    let drift = (percent_sum - dec!(100)).abs();
    assert!(drift < dec!(0.0000001), "drift was {drift}");

    // Savings is positive here, so the eighth category survives intact and
    // the colors walk the palette in order.
    for (index, slice) in series.slices.iter().enumerate() {
        assert_eq!(slice.color, CHART_PALETTE[index % CHART_PALETTE.len()]);
        assert!(slice.percent >= dec!(0));
    }
}

#[test]
fn overspending_flows_through_as_a_clamped_savings_slice() {
    let schedule = TaxSchedule::fy_2025_26();
    let worksheet = OverviewWorksheet::new(&schedule);
    let mut inputs = sample_inputs();
    inputs.rent = dec!(95000);

    let overview = worksheet.calculate(&inputs).unwrap();
    assert!(overview.net_savings < dec!(0));

    let series = normalize(&overview.snapshot(&inputs));
    let savings = series
        .slices
        .iter()
        .find(|s| s.label == "Savings")
        .unwrap();

    assert_eq!(savings.amount, dec!(0));
    assert_eq!(savings.percent, dec!(0));
}

#[test]
fn zero_income_degenerates_to_the_placeholder() {
    let schedule = TaxSchedule::fy_2025_26();
    let worksheet = OverviewWorksheet::new(&schedule);
    let inputs = MonthlyInputs {
        monthly_income: dec!(0),
        rent: dec!(0),
        food: dec!(0),
        transport: dec!(0),
        pf_percent: dec!(0),
        investment: dec!(0),
        other_expenses: dec!(0),
    };

    let overview = worksheet.calculate(&inputs).unwrap();
    let series = normalize(&overview.snapshot(&inputs));

    assert_eq!(series.len(), 1);
    assert_eq!(series.slices[0].label, NO_DATA_LABEL);
    assert_eq!(series.slices[0].percent, dec!(100));
}

#[test]
fn rerunning_the_pipeline_is_deterministic() {
    let schedule = TaxSchedule::fy_2025_26();
    let worksheet = OverviewWorksheet::new(&schedule);
    let inputs = sample_inputs();

    let first = normalize(&worksheet.calculate(&inputs).unwrap().snapshot(&inputs));
    let second = normalize(&worksheet.calculate(&inputs).unwrap().snapshot(&inputs));

    assert_eq!(first, second);
}
