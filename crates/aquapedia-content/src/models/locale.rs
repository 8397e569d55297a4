use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A locale with content of its own: every encyclopedia entity keeps one
/// translation per locale, and the editor shows one tab per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Az,
    Ru,
    En,
}

/// A locale tag the backend does not serve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale: {0}")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// All supported locales, in the order the editor tabs show them.
    pub const ALL: [Locale; 3] = [Locale::Az, Locale::Ru, Locale::En];

    /// The lowercase tag used in API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Az => "az",
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "az" => Ok(Locale::Az),
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}
