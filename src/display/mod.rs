//! Terminal formatting for calculation results
//!
//! Formats engine output for terminal display. Shared helpers live here;
//! per-result formatting is in the submodules.

pub mod health;
pub mod payoff;

pub use health::format_health_report;
pub use payoff::{format_payoff_summary, format_schedule};

/// Format a currency amount with a symbol, two decimal places
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar representation of value against max_value
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1050.5, "$"), "$1050.50");
        assert_eq!(format_amount(-12.0, "$"), "-$12.00");
        assert_eq!(format_amount(0.0, "SAR "), "SAR 0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);

        let empty = format_bar(0.0, 100.0, 10);
        assert_eq!(empty.chars().filter(|c| *c == '█').count(), 0);
    }
}
