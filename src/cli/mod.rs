//! CLI command definitions and handlers
//!
//! Each submodule owns one calculator's argument struct and handler.
//! Handlers parse nothing themselves: clap delivers plain numbers, the
//! engine computes, and display/serde render the result.

pub mod health;
pub mod payoff;

pub use health::{handle_health_command, HealthArgs};
pub use payoff::{handle_payoff_command, PayoffArgs};
