//! Financial health value objects
//!
//! Input snapshot and scored report for the health scorer. The scorer is
//! total: any finite input produces a report, so there is no error type
//! on this side of the engine.

use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// A snapshot of a user's monthly finances
///
/// No invariants are enforced here; upstream form validation owns range
/// checks. The scorer guards its own divisions, so degenerate values
/// (all zeros, zero income) still score deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialStatus {
    /// Gross monthly income
    pub monthly_income: f64,
    /// Total monthly expenses
    pub monthly_expenses: f64,
    /// Total liquid savings
    pub total_savings: f64,
    /// Total outstanding debt
    pub total_debts: f64,
}

/// The three sub-ratios the composite score is built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthRatios {
    /// Percent of monthly income not consumed by expenses
    pub savings_rate: f64,
    /// Total debt as a percent of annual income
    pub debt_ratio: f64,
    /// Months of expenses the savings could sustain
    pub emergency_fund_months: f64,
}

/// A prioritized, actionable recommendation
///
/// Variants are ordered by priority; the scorer appends them in this
/// order. `OnTrack` appears alone, only when nothing else triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Savings rate below the 20% target
    IncreaseSavingsRate,
    /// Debt ratio above the 30% comfort threshold
    PayDownDebt,
    /// Emergency fund below six months of expenses
    BuildEmergencyFund,
    /// All three checks passed
    OnTrack,
}

impl Recommendation {
    /// Human-readable message in the requested locale
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::IncreaseSavingsRate, Locale::English) => {
                "Increase your savings rate to at least 20% of monthly income."
            }
            (Self::IncreaseSavingsRate, Locale::Arabic) => {
                "ارفع معدل ادخارك إلى 20٪ على الأقل من دخلك الشهري."
            }
            (Self::PayDownDebt, Locale::English) => {
                "Prioritize paying off high-interest debt first."
            }
            (Self::PayDownDebt, Locale::Arabic) => {
                "أعطِ الأولوية لسداد الديون ذات الفائدة المرتفعة أولاً."
            }
            (Self::BuildEmergencyFund, Locale::English) => {
                "Build an emergency fund covering 6 months of expenses."
            }
            (Self::BuildEmergencyFund, Locale::Arabic) => {
                "كوّن صندوق طوارئ يغطي نفقات 6 أشهر."
            }
            (Self::OnTrack, Locale::English) => {
                "Your financial position is strong. Keep it up!"
            }
            (Self::OnTrack, Locale::Arabic) => "وضعك المالي قوي. واصل على هذا النهج!",
        }
    }
}

/// The scored health report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Composite score in 0..=100
    pub health_score: u8,
    /// The sub-ratios behind the score, for dashboard display
    pub ratios: HealthRatios,
    /// Triggered recommendations, in priority order
    pub recommendations: Vec<Recommendation>,
}

impl HealthReport {
    /// Render the recommendations as localized strings, in order
    pub fn messages(&self, locale: Locale) -> Vec<&'static str> {
        self.recommendations
            .iter()
            .map(|r| r.message(locale))
            .collect()
    }
}
