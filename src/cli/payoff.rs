//! CLI command for the debt payoff calculator

use clap::Args;

use crate::config::Settings;
use crate::display::{format_payoff_summary, format_schedule};
use crate::error::HisabiResult;
use crate::models::DebtInput;
use crate::services::calculate_payoff_with_schedule;

/// Arguments for the payoff calculator
#[derive(Args, Debug)]
pub struct PayoffArgs {
    /// Amount currently owed
    pub principal: f64,

    /// Annual interest rate as a percentage (e.g. 12 for 12% APR)
    pub rate: f64,

    /// Fixed monthly payment
    pub payment: f64,

    /// Print the full month-by-month amortization schedule
    #[arg(short, long)]
    pub schedule: bool,

    /// Emit the result as JSON instead of formatted text
    #[arg(short, long)]
    pub json: bool,
}

/// Handle the payoff command
pub fn handle_payoff_command(settings: &Settings, args: PayoffArgs) -> HisabiResult<()> {
    let debt = DebtInput::new(args.principal, args.rate, args.payment);
    let (result, rows) = calculate_payoff_with_schedule(&debt)?;

    if args.json {
        let output = if args.schedule {
            serde_json::to_string_pretty(&serde_json::json!({
                "result": result,
                "schedule": rows,
            }))?
        } else {
            serde_json::to_string_pretty(&result)?
        };
        println!("{}", output);
        return Ok(());
    }

    print!(
        "{}",
        format_payoff_summary(&result, &settings.currency_symbol)
    );
    if args.schedule {
        println!();
        println!("{}", format_schedule(&rows, &settings.currency_symbol));
    }

    Ok(())
}
