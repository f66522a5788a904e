//! Display locales supported by the engine.
//!
//! Every fixed string in a reply is resolved through an explicit [`Locale`]
//! value; nothing reads ambient device or process state.
//!
//! # Examples
//! ```
//! use hoinar_core::Locale;
//!
//! assert_eq!(Locale::Ro.as_str(), "ro");
//! assert_eq!(Locale::En.to_string(), "en");
//! ```

use thiserror::Error;

/// A supported display locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Romanian, the primary locale.
    #[default]
    Ro,
    /// English.
    En,
}

impl Locale {
    /// Every supported locale, in preference order.
    pub const ALL: [Self; 2] = [Self::Ro, Self::En];

    /// Return the locale as a lowercase BCP 47 language code.
    ///
    /// # Examples
    /// ```
    /// use hoinar_core::Locale;
    ///
    /// assert_eq!(Locale::En.as_str(), "en");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ro => "ro",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when parsing a [`Locale`] from text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown locale '{input}'")]
pub struct ParseLocaleError {
    /// The rejected input.
    pub input: String,
}

impl std::str::FromStr for Locale {
    type Err = ParseLocaleError;

    /// Parse a language tag, ignoring any region subtag (`ro-RO`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        let base = tag.split(['-', '_']).next().unwrap_or_default();
        match base {
            "ro" | "romanian" => Ok(Self::Ro),
            "en" | "english" => Ok(Self::En),
            _ => Err(ParseLocaleError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Locale::Ro.to_string(), Locale::Ro.as_str());
    }

    #[rstest]
    #[case("ro", Locale::Ro)]
    #[case("RO", Locale::Ro)]
    #[case("ro-RO", Locale::Ro)]
    #[case("romanian", Locale::Ro)]
    #[case("en", Locale::En)]
    #[case("en_US", Locale::En)]
    #[case(" en ", Locale::En)]
    fn parses_language_tags(#[case] input: &str, #[case] expected: Locale) {
        assert_eq!(Locale::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Locale::from_str("fr").unwrap_err();
        assert_eq!(err.input, "fr");
    }

    #[rstest]
    fn defaults_to_romanian() {
        assert_eq!(Locale::default(), Locale::Ro);
    }
}
