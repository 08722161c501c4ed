//! Health report formatting

use crate::models::{HealthReport, Locale};

use super::{format_bar, format_percentage};

/// Format a health report with score bar, ratios, and recommendations
pub fn format_health_report(report: &HealthReport, locale: Locale) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Health score: {:>3}/100  {}\n",
        report.health_score,
        format_bar(report.health_score as f64, 100.0, 20)
    ));
    output.push('\n');

    output.push_str(&format!(
        "  Savings rate:    {}\n",
        format_percentage(report.ratios.savings_rate)
    ));
    output.push_str(&format!(
        "  Debt ratio:      {}\n",
        format_percentage(report.ratios.debt_ratio)
    ));
    output.push_str(&format!(
        "  Emergency fund:  {:.1} month(s)\n",
        report.ratios.emergency_fund_months
    ));
    output.push('\n');

    output.push_str("Recommendations:\n");
    for message in report.messages(locale) {
        output.push_str(&format!("  - {}\n", message));
    }

    output
}
