//! Text normalisation shared by keyword extraction, searchable text, and
//! slug generation.
//!
//! Venue data and prompts mix Romanian diacritics with plain ASCII; matching
//! happens on the folded, lowercase form so that "Liniștit" and "linistit"
//! compare equal.

/// Map a single character to its ASCII base letter.
///
/// Covers Romanian diacritics (including the legacy cedilla forms) and the
/// common Latin accents; every other character passes through unchanged.
///
/// # Examples
/// ```
/// use hoinar_core::text::fold_diacritic;
///
/// assert_eq!(fold_diacritic('ș'), 's');
/// assert_eq!(fold_diacritic('k'), 'k');
/// ```
#[must_use]
pub const fn fold_diacritic(c: char) -> char {
    match c {
        'ă' | 'â' | 'à' | 'á' | 'ä' | 'ã' => 'a',
        'î' | 'ì' | 'í' | 'ï' => 'i',
        'ș' | 'ş' => 's',
        'ț' | 'ţ' => 't',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ò' | 'ó' | 'ô' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

/// Lowercase `text`, fold diacritics, and blank out everything that is not
/// an ASCII letter or digit.
///
/// The result is suitable for substring matching and for whitespace
/// tokenisation. The function is idempotent.
///
/// # Examples
/// ```
/// use hoinar_core::text::normalise;
///
/// assert_eq!(normalise("Brașov"), "brasov");
/// assert_eq!(normalise("Cafeneaua Veche"), "cafeneaua veche");
/// ```
#[must_use]
pub fn normalise(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Build a URL-safe slug from free text.
///
/// # Examples
/// ```
/// use hoinar_core::text::slugify;
///
/// assert_eq!(slugify("Cafeneaua Veche 9"), "cafeneaua-veche-9");
/// assert_eq!(slugify("La Piață!"), "la-piata");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    normalise(text).split_whitespace().collect::<Vec<_>>().join("-")
}
