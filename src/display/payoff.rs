//! Payoff result formatting
//!
//! Renders payoff summaries as plain text and amortization schedules as
//! a table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{PayoffResult, ScheduleRow};

use super::format_amount;

/// Format the headline payoff numbers
pub fn format_payoff_summary(result: &PayoffResult, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Months to payoff:  {}\n", result.months));
    output.push_str(&format!(
        "Timeline:          {} year(s), {} month(s)\n",
        result.years, result.remaining_months
    ));
    output.push_str(&format!(
        "Total paid:        {}\n",
        format_amount(result.total_paid, symbol)
    ));
    output.push_str(&format!(
        "Total interest:    {}\n",
        format_amount(result.total_interest, symbol)
    ));

    output
}

/// One row of the rendered schedule table
#[derive(Tabled)]
struct ScheduleRowView {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format an amortization schedule as a table
pub fn format_schedule(rows: &[ScheduleRow], symbol: &str) -> String {
    if rows.is_empty() {
        return "No schedule to display.".to_string();
    }

    let views: Vec<ScheduleRowView> = rows
        .iter()
        .map(|row| ScheduleRowView {
            month: row.month,
            payment: format_amount(row.payment, symbol),
            interest: format_amount(row.interest, symbol),
            principal: format_amount(row.principal, symbol),
            balance: format_amount(row.balance, symbol),
        })
        .collect();

    let mut table = Table::new(views);
    table
        .with(Style::sharp())
        .modify(Columns::new(1..), Alignment::right());

    table.to_string()
}
