//! CLI command for the financial health scorer

use clap::Args;

use crate::config::Settings;
use crate::display::format_health_report;
use crate::error::HisabiResult;
use crate::models::{FinancialStatus, Locale};
use crate::services::score_health;

/// Arguments for the health scorer
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Gross monthly income
    #[arg(short, long)]
    pub income: f64,

    /// Total monthly expenses
    #[arg(short, long)]
    pub expenses: f64,

    /// Total liquid savings
    #[arg(short, long)]
    pub savings: f64,

    /// Total outstanding debt
    #[arg(short, long)]
    pub debts: f64,

    /// Locale for recommendation messages (en or ar)
    #[arg(short, long, env = "HISABI_LOCALE")]
    pub locale: Option<Locale>,

    /// Emit the result as JSON instead of formatted text
    #[arg(short, long)]
    pub json: bool,
}

/// Handle the health command
pub fn handle_health_command(settings: &Settings, args: HealthArgs) -> HisabiResult<()> {
    let status = FinancialStatus {
        monthly_income: args.income,
        monthly_expenses: args.expenses,
        total_savings: args.savings,
        total_debts: args.debts,
    };
    let locale = args.locale.unwrap_or(settings.default_locale);
    let report = score_health(&status);

    if args.json {
        let output = serde_json::to_string_pretty(&serde_json::json!({
            "health_score": report.health_score,
            "ratios": report.ratios,
            "recommendations": report.messages(locale),
        }))?;
        println!("{}", output);
        return Ok(());
    }

    print!("{}", format_health_report(&report, locale));

    Ok(())
}
