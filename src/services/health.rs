//! Financial health scorer
//!
//! Translates four raw monthly figures into a composite 0-100 score and
//! a short, prioritized list of recommendations. The scorer is total:
//! every division is guarded, so any finite input (including all zeros)
//! produces a deterministic report rather than a NaN or a panic.

use crate::models::{FinancialStatus, HealthRatios, HealthReport, Recommendation};

/// Score a financial snapshot
///
/// Three sub-ratios each contribute a banded number of points:
///
/// | Ratio | Bands |
/// |---|---|
/// | Savings rate | >20% +30, >10% +20, >0% +10 |
/// | Debt-to-annual-income | <30% +30, <50% +20, <100% +10 |
/// | Emergency fund months | >=6 +40, >=3 +30, >=1 +20, else +10 |
///
/// The sum is capped at 100. Recommendations are appended in priority
/// order for every rule that triggers; a single affirmation is returned
/// when none do.
pub fn score_health(status: &FinancialStatus) -> HealthReport {
    let ratios = compute_ratios(status);

    let savings_points = match ratios.savings_rate {
        r if r > 20.0 => 30,
        r if r > 10.0 => 20,
        r if r > 0.0 => 10,
        _ => 0,
    };

    let debt_points = match ratios.debt_ratio {
        r if r < 30.0 => 30,
        r if r < 50.0 => 20,
        r if r < 100.0 => 10,
        _ => 0,
    };

    // Baseline of 10 even at zero coverage.
    let emergency_points = match ratios.emergency_fund_months {
        m if m >= 6.0 => 40,
        m if m >= 3.0 => 30,
        m if m >= 1.0 => 20,
        _ => 10,
    };

    let health_score = (savings_points + debt_points + emergency_points).min(100) as u8;

    let mut recommendations = Vec::new();
    if ratios.savings_rate < 20.0 {
        recommendations.push(Recommendation::IncreaseSavingsRate);
    }
    if ratios.debt_ratio > 30.0 {
        recommendations.push(Recommendation::PayDownDebt);
    }
    if ratios.emergency_fund_months < 6.0 {
        recommendations.push(Recommendation::BuildEmergencyFund);
    }
    if recommendations.is_empty() {
        recommendations.push(Recommendation::OnTrack);
    }

    HealthReport {
        health_score,
        ratios,
        recommendations,
    }
}

fn compute_ratios(status: &FinancialStatus) -> HealthRatios {
    let savings_rate = if status.monthly_income > 0.0 {
        (status.monthly_income - status.monthly_expenses) / status.monthly_income * 100.0
    } else {
        0.0
    };

    let debt_ratio = if status.monthly_income > 0.0 {
        status.total_debts / (status.monthly_income * 12.0) * 100.0
    } else {
        0.0
    };

    let emergency_fund_months = if status.monthly_expenses > 0.0 {
        status.total_savings / status.monthly_expenses
    } else {
        0.0
    };

    HealthRatios {
        savings_rate,
        debt_ratio,
        emergency_fund_months,
    }
}
