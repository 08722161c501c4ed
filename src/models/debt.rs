//! Debt payoff value objects
//!
//! Inputs and outputs of the amortization calculator. Amounts are plain
//! f64 currency units: the calculator works on whatever decimals the
//! caller has already parsed, and its invariants hold to within 0.01
//! currency units over a full simulation.

use serde::{Deserialize, Serialize};

/// A single debt paid down by a fixed monthly installment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtInput {
    /// Amount currently owed, excluding interest
    pub principal: f64,
    /// Annual interest rate as a percentage (e.g. 12.0 for 12% APR)
    pub annual_rate_percent: f64,
    /// Fixed payment made every month
    pub monthly_payment: f64,
}

impl DebtInput {
    /// Create a new debt input
    pub fn new(principal: f64, annual_rate_percent: f64, monthly_payment: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            monthly_payment,
        }
    }

    /// Monthly interest rate as a fraction (APR% / 100 / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }
}

/// Outcome of a successful payoff calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffResult {
    /// Total number of monthly payments until the balance reaches zero
    pub months: u32,
    /// Whole years portion of the timeline (`months / 12`)
    pub years: u32,
    /// Months beyond the whole years, in 0..=11
    pub remaining_months: u32,
    /// Money actually paid, with the final installment capped at what is owed
    pub total_paid: f64,
    /// `total_paid - principal`, never negative
    pub total_interest: f64,
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Month number, starting at 1
    pub month: u32,
    /// Payment made this month (the last one may be partial)
    pub payment: f64,
    /// Interest portion of the payment
    pub interest: f64,
    /// Principal portion of the payment
    pub principal: f64,
    /// Balance remaining after the payment
    pub balance: f64,
}
