//! Debt amortization calculator
//!
//! Computes, for a single debt paid down by a fixed monthly installment,
//! how long full payoff takes and what it costs in total, using the
//! standard monthly-compounding recurrence: each month interest accrues
//! on the remaining balance, the payment covers interest first, and the
//! remainder reduces principal.
//!
//! The final installment is capped at the remaining balance plus its
//! interest, so `total_paid` reflects only money actually needed. Inputs
//! that can never terminate (payment at or below the first month's
//! interest) are rejected up front, which also bounds the loop.

use serde::Serialize;
use thiserror::Error;

use crate::models::{DebtInput, PayoffResult, ScheduleRow};
use crate::services::round_to_cents;

/// Balances below this are treated as fully paid (float dust, not money)
const BALANCE_EPSILON: f64 = 1e-6;

/// Why a payoff calculation rejected its inputs
///
/// These are values, not panics: callers branch on the `Err` arm before
/// reading any numeric field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "error")]
pub enum PayoffError {
    /// Principal must be greater than zero
    #[error("Principal must be greater than zero")]
    NonPositivePrincipal,

    /// Monthly payment must be greater than zero
    #[error("Monthly payment must be greater than zero")]
    NonPositivePayment,

    /// Annual interest rate cannot be negative
    #[error("Annual interest rate cannot be negative")]
    NegativeRate,

    /// The payment does not cover the first month's interest, so the
    /// balance would grow forever
    #[error("Monthly payment does not cover the monthly interest; the debt would never be paid off")]
    PaymentBelowInterest,
}

/// Compute the payoff timeline and total cost for a debt
///
/// Validation short-circuits in a fixed order: principal, then payment,
/// then rate sign, then the termination check.
///
/// # Examples
/// ```
/// use hisabi::models::DebtInput;
/// use hisabi::services::calculate_payoff;
///
/// let result = calculate_payoff(&DebtInput::new(10000.0, 0.0, 1000.0)).unwrap();
/// assert_eq!(result.months, 10);
/// assert_eq!(result.total_interest, 0.0);
/// ```
pub fn calculate_payoff(debt: &DebtInput) -> Result<PayoffResult, PayoffError> {
    validate(debt)?;
    let (result, _) = run_schedule(debt);
    Ok(result)
}

/// Like [`calculate_payoff`], but also returns the month-by-month schedule
///
/// The schedule is what calculator pages chart; dashboard widgets that
/// only need the headline numbers should call [`calculate_payoff`].
pub fn calculate_payoff_with_schedule(
    debt: &DebtInput,
) -> Result<(PayoffResult, Vec<ScheduleRow>), PayoffError> {
    validate(debt)?;
    Ok(run_schedule(debt))
}

fn validate(debt: &DebtInput) -> Result<(), PayoffError> {
    if debt.principal <= 0.0 {
        return Err(PayoffError::NonPositivePrincipal);
    }
    if debt.monthly_payment <= 0.0 {
        return Err(PayoffError::NonPositivePayment);
    }
    if debt.annual_rate_percent < 0.0 {
        return Err(PayoffError::NegativeRate);
    }

    // Strict comparison is not enough here: a payment that matches the
    // interest to within float rounding would shrink the balance by mere
    // ulps per month. The margin treats those as non-terminating too.
    let r = debt.monthly_rate();
    if r > 0.0 && debt.monthly_payment - debt.principal * r <= BALANCE_EPSILON {
        return Err(PayoffError::PaymentBelowInterest);
    }

    Ok(())
}

/// Simulate the amortization month by month
///
/// Termination is guaranteed by `validate`: the payment strictly exceeds
/// the first month's interest, so the balance shrinks every month.
fn run_schedule(debt: &DebtInput) -> (PayoffResult, Vec<ScheduleRow>) {
    let r = debt.monthly_rate();
    let mut balance = debt.principal;
    let mut total_paid = 0.0;
    let mut months: u32 = 0;
    let mut rows = Vec::new();

    while balance > BALANCE_EPSILON {
        months += 1;
        let interest = balance * r;
        let owed = balance + interest;

        // Last installment: pay exactly what is owed, never more.
        let payment = if debt.monthly_payment >= owed - BALANCE_EPSILON {
            owed
        } else {
            debt.monthly_payment
        };

        let principal_part = payment - interest;
        balance -= principal_part;
        if balance < BALANCE_EPSILON {
            balance = 0.0;
        }
        total_paid += payment;

        rows.push(ScheduleRow {
            month: months,
            payment: round_to_cents(payment),
            interest: round_to_cents(interest),
            principal: round_to_cents(principal_part),
            balance: round_to_cents(balance),
        });
    }

    let total_paid = round_to_cents(total_paid);
    let total_interest = round_to_cents((total_paid - debt.principal).max(0.0));

    let result = PayoffResult {
        months,
        years: months / 12,
        remaining_months: months % 12,
        total_paid,
        total_interest,
    };
    (result, rows)
}
