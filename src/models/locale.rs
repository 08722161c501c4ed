//! Output locale
//!
//! Hisabi serves Arabic- and English-speaking users. Interface chrome is
//! the CLI's concern, but recommendation messages are produced by the
//! engine itself, so the engine carries both renderings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language for engine-produced messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English ("en")
    #[default]
    English,
    /// Arabic ("ar")
    Arabic,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ar" | "arabic" => Ok(Self::Arabic),
            other => Err(format!("Unknown locale: {} (expected 'en' or 'ar')", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::Arabic => write!(f, "ar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("AR".parse::<Locale>().unwrap(), Locale::Arabic);
        assert_eq!("arabic".parse::<Locale>().unwrap(), Locale::Arabic);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Arabic).unwrap(), "\"arabic\"");
    }

    #[test]
    fn test_display_round_trip() {
        for locale in [Locale::English, Locale::Arabic] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }
}
