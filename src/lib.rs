//! Hisabi - Bilingual personal-finance calculators for the terminal
//!
//! This library provides the calculation engine behind the Hisabi CLI:
//! a debt amortization/payoff calculator and a financial health scorer.
//! Both are pure, stateless functions over plain numeric inputs; callers
//! (CLI handlers, report generators) render the returned values.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core value objects (debt inputs, payoff results, health reports)
//! - `services`: The calculation engine (amortization, health scoring)
//! - `display`: Terminal formatting for results
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust
//! use hisabi::models::DebtInput;
//! use hisabi::services::calculate_payoff;
//!
//! let debt = DebtInput::new(10000.0, 12.0, 1000.0);
//! let result = calculate_payoff(&debt).unwrap();
//! assert_eq!(result.months, 11);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::HisabiError;
