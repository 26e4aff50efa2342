//! Locale identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLocaleError;
use crate::table::LocalizationTable;

/// A supported display language.
///
/// The set is closed: every variant has a complete string table, so locale
/// selection can never fail once a `Locale` value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// French
    Fr,
    /// English (the fallback when no language is selected)
    #[default]
    En,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    /// Returns the canonical tag for this locale, e.g. `"fr"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// Returns the string table for this locale.
    pub fn table(self) -> &'static LocalizationTable {
        LocalizationTable::for_locale(self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Parses a locale tag.
    ///
    /// Matching is case-insensitive on the primary subtag; a region suffix
    /// separated by `-` or `_` is accepted and ignored, so `"fr"`, `"FR"`
    /// and `"fr-FR"` all select [`Locale::Fr`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(ParseLocaleError::EmptyTag);
        }

        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase();

        match primary.as_str() {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            _ => Err(ParseLocaleError::UnknownTag {
                tag: tag.to_string(),
            }),
        }
    }
}
