//! The calculation engine
//!
//! Pure, stateless numeric routines: the amortization calculator and the
//! health scorer. Neither holds state, performs I/O, or calls the other;
//! the same input always produces the same output, so callers may invoke
//! them concurrently without coordination.

pub mod amortization;
pub mod health;

pub use amortization::{calculate_payoff, calculate_payoff_with_schedule, PayoffError};
pub use health::score_health;

/// Round a currency amount to the nearest cent
pub(crate) fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
