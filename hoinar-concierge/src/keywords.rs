//! Keyword extraction from free-text prompts.

use hoinar_core::text;

use crate::strings::LocaleStrings;

/// Extract the searchable keywords from a prompt.
///
/// The prompt is lowercased, diacritics are folded, punctuation becomes
/// whitespace, and the remaining tokens are kept in order with duplicates
/// preserved. Tokens of one or two characters and the locale's function
/// words are dropped. An empty result is valid and means ranking falls
/// back to rating and proximity alone.
///
/// # Examples
///
/// ```
/// use hoinar_concierge::{LocaleStrings, extract_keywords};
/// use hoinar_core::Locale;
///
/// let strings = LocaleStrings::for_locale(Locale::Ro);
/// let keywords = extract_keywords("Vreau o cafenea liniștită!", strings);
/// assert_eq!(keywords, ["cafenea", "linistita"]);
/// ```
#[must_use]
pub fn extract_keywords(prompt: &str, strings: &LocaleStrings) -> Vec<String> {
    text::normalise(prompt)
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .filter(|token| !strings.is_stop_word(token))
        .map(str::to_owned)
        .collect()
}
