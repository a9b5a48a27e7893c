mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;

use paisa_assistant::{AssistantConfig, generate_answer};
use paisa_core::TaxSchedule;
use paisa_core::calculations::{MonthlyInputs, OverviewWorksheet, normalize};

/// Monthly budget overview with a slab-based income tax estimate and an
/// optional provider-backed Q&A pass over the computed figures.
#[derive(Parser, Debug)]
#[command(name = "paisa")]
#[command(version, about, long_about = None)]
struct Args {
    /// Monthly income (₹)
    #[arg(long)]
    monthly_income: Decimal,

    /// Rent / housing (₹)
    #[arg(long, default_value = "0")]
    rent: Decimal,

    /// Food / groceries (₹)
    #[arg(long, default_value = "0")]
    food: Decimal,

    /// Transport (₹)
    #[arg(long, default_value = "0")]
    transport: Decimal,

    /// Provident fund contribution as a percentage of income (0-100)
    #[arg(long, default_value = "0")]
    pf_percent: Decimal,

    /// Investments (₹)
    #[arg(long, default_value = "0")]
    investment: Decimal,

    /// Other expenses (₹)
    #[arg(long, default_value = "0")]
    other_expenses: Decimal,

    /// Question to ask about the computed figures
    #[arg(long)]
    ask: Option<String>,

    /// Base URL of the OpenAI-compatible completion API
    #[arg(long)]
    base_url: Option<String>,

    /// Model identifier requested from the provider
    #[arg(long)]
    model: Option<String>,

    /// Environment variable holding the provider API key
    #[arg(long)]
    api_key_env: Option<String>,

    /// Disable ANSI colors in the breakdown rendering
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

impl Args {
    fn monthly_inputs(&self) -> MonthlyInputs {
        MonthlyInputs {
            monthly_income: self.monthly_income,
            rent: self.rent,
            food: self.food,
            transport: self.transport,
            pf_percent: self.pf_percent,
            investment: self.investment,
            other_expenses: self.other_expenses,
        }
    }

    fn assistant_config(&self) -> AssistantConfig {
        let mut config = AssistantConfig::default();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(api_key_env) = &self.api_key_env {
            config.api_key_env = api_key_env.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let schedule = TaxSchedule::fy_2025_26();
    let worksheet = OverviewWorksheet::new(&schedule);
    let inputs = args.monthly_inputs();

    let overview = worksheet
        .calculate(&inputs)
        .context("failed to derive the monthly overview")?;
    let series = normalize(&overview.snapshot(&inputs));
    let summary = render::financial_summary(&inputs, &overview);

    println!("Calculated Summary");
    for line in render::summary_lines(&summary) {
        println!("  {line}");
    }
    println!();
    println!("Monthly Breakdown (% of Income)");
    print!("{}", render::render_series(&series, !args.no_color));

    if let Some(question) = &args.ask {
        let answer = generate_answer(&args.assistant_config(), question, &summary);
        println!();
        println!("{answer}");
    }

    Ok(())
}
