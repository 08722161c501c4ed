//! Core value objects for Hisabi
//!
//! Every type here is a transient value: constructed from caller input,
//! consumed by exactly one calculation, and discarded. Nothing is cached
//! or mutated across calls.

pub mod debt;
pub mod locale;
pub mod status;

pub use debt::{DebtInput, PayoffResult, ScheduleRow};
pub use locale::Locale;
pub use status::{FinancialStatus, HealthRatios, HealthReport, Recommendation};
