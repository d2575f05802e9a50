//! Supported locales
//!
//! Content trees are fully duplicated per locale. There is no fallback from
//! a missing item to another locale: a slug present under `en` need not
//! exist under `zh-Hans`, and queries never cross trees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported content locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-Hans")]
    ZhHans,
    #[serde(rename = "zh-Hant")]
    ZhHant,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Locale; 3] = [Locale::En, Locale::ZhHans, Locale::ZhHant];

    /// Parse a locale identifier. Anything outside the supported set is
    /// `None`, not an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Locale::En),
            "zh-Hans" => Some(Locale::ZhHans),
            "zh-Hant" => Some(Locale::ZhHant),
            _ => None,
        }
    }

    /// The identifier as it appears in directory names
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhHans => "zh-Hans",
            Locale::ZhHant => "zh-Hant",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("zh-Hans"), Some(Locale::ZhHans));
        assert_eq!(Locale::parse("zh-Hant"), Some(Locale::ZhHant));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse("zh-hans"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_display_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.as_str()), Some(locale));
        }
    }
}
