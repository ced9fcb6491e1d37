//! Display locales and per-locale strings.

use serde::{Deserialize, Serialize};

/// Display locale enumeration
///
/// The locale selects presentation strings only; it never affects which
/// digests are included or how they are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Simplified Chinese
    Zh,
    /// English
    En,
}

impl Locale {
    /// Every supported locale, in output order.
    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    /// Get the locale code
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }
}

impl TryFrom<&str> for Locale {
    type Error = String;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "zh" => Ok(Locale::Zh),
            "en" => Ok(Locale::En),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A string with one variant per locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub zh: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            zh: zh.into(),
            en: en.into(),
        }
    }

    /// Get the variant for a locale
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Zh => &self.zh,
            Locale::En => &self.en,
        }
    }
}
