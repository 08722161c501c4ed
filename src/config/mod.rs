//! Configuration for Hisabi
//!
//! Path resolution and user settings (default locale, currency symbol).

pub mod paths;
pub mod settings;

pub use paths::HisabiPaths;
pub use settings::Settings;
