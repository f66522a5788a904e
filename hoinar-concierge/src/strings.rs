//! Locale string tables for every fixed phrase the concierge emits.
//!
//! All user-visible text lives here rather than inline at the call sites,
//! so each locale is enumerable and testable as one unit. Templates carry
//! `{{placeholder}}` markers substituted at render time.

use hoinar_core::Locale;

/// Function words excluded from keyword extraction, stored in folded form.
///
/// Prompts mix Romanian and English venue vocabulary freely, so one shared
/// bilingual list backs both locale tables. Words of one or two characters
/// never reach the stop list; extraction drops them earlier by length.
const STOP_WORDS: &[&str] = &[
    "and", "are", "around", "care", "catre", "ceva", "cum", "dar", "din", "doar", "dupa", "este",
    "fara", "find", "foarte", "for", "have", "imi", "intr", "iti", "langa", "like", "loc",
    "locuri", "looking", "mai", "mult", "near", "nearby", "niste", "pentru", "place", "places",
    "prea", "sau", "show", "some", "something", "somewhere", "spot", "spots", "spre", "sunt",
    "that", "the", "this", "too", "una", "unde", "very", "vreau", "want", "with", "would",
];

/// Fixed strings for one locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleStrings {
    /// Folded tokens dropped during keyword extraction.
    pub stop_words: &'static [&'static str],
    /// Reply to a blank prompt, asking the user for detail.
    pub ask_for_details: &'static str,
    /// Reply when there are no venues to recommend from.
    pub insufficient_data: &'static str,
    /// Equivalent-meaning replies when no venue matches the keywords.
    pub no_match_pool: [&'static str; 3],
    /// Intro restating the extracted keywords via `{{keywords}}`.
    pub intro_with_keywords: &'static str,
    /// Intro used when the prompt yielded no keywords.
    pub intro_generic: &'static str,
    /// Label in front of the matched-keyword list.
    pub matches_label: &'static str,
    /// Label in front of the review snippet.
    pub tip_label: &'static str,
    /// Author display name for reviews without one.
    pub anonymous_author: &'static str,
    /// Distance template in metres via `{{meters}}`.
    pub distance_metres: &'static str,
    /// Distance template in kilometres via `{{km}}`.
    pub distance_kilometres: &'static str,
}

static ROMANIAN: LocaleStrings = LocaleStrings {
    stop_words: STOP_WORDS,
    ask_for_details: "Spune-mi ce îți dorești — cafea, restaurant, vibe — și îți recomand ceva.",
    insufficient_data: "Nu am suficiente date încă pentru a oferi o recomandare.",
    no_match_pool: [
        "Hmm, nu am găsit un loc care să se potrivească. Încearcă să îmi descrii altfel ce cauți.",
        "Nu am nimerit nimic pe gustul tău de data asta. Reformulează și mai încercăm o dată.",
        "Încă nu am un loc potrivit pentru asta. Îmi dai mai multe detalii?",
    ],
    intro_with_keywords: "Pe baza preferințelor tale ({{keywords}}), iată ce îți recomand:",
    intro_generic: "Iată două locuri care merită încercate:",
    matches_label: "Potriviri",
    tip_label: "Sfat local",
    anonymous_author: "Anonim",
    distance_metres: "{{meters}} m distanță",
    distance_kilometres: "{{km}} km distanță",
};

static ENGLISH: LocaleStrings = LocaleStrings {
    stop_words: STOP_WORDS,
    ask_for_details: "Tell me what kind of vibe you are looking for and I will suggest something.",
    insufficient_data: "I do not have enough data yet to recommend a place.",
    no_match_pool: [
        "Hmm, I could not find a spot that matches. Try describing what you are after differently.",
        "Nothing quite fits this time. Rephrase it and we will give it another go.",
        "I do not have the right place for that yet. Could you share a few more details?",
    ],
    intro_with_keywords: "Based on what you are looking for ({{keywords}}), here is what I would try:",
    intro_generic: "Here are a couple of spots worth trying:",
    matches_label: "Matches",
    tip_label: "Local tip",
    anonymous_author: "Guest",
    distance_metres: "{{meters}} m away",
    distance_kilometres: "{{km}} km away",
};

impl LocaleStrings {
    /// Borrow the string table for `locale`.
    #[must_use]
    pub const fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::Ro => &ROMANIAN,
            Locale::En => &ENGLISH,
        }
    }

    /// Report whether a folded token is a function word.
    #[must_use]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(&token)
    }

    /// Render the kilometre phrasing for a distance, one decimal place.
    #[must_use]
    pub fn kilometres(&self, km: f64) -> String {
        self.distance_kilometres
            .replace("{{km}}", &format!("{km:.1}"))
    }

    /// Render the metre phrasing for a whole-metre distance.
    #[must_use]
    pub fn metres(&self, metres: f64) -> String {
        self.distance_metres
            .replace("{{meters}}", &format!("{metres:.0}"))
    }
}

/// Format a distance the way venue lists display it: whole metres below
/// one kilometre, one-decimal kilometres from there up.
///
/// # Examples
///
/// ```
/// use hoinar_concierge::format_distance;
/// use hoinar_core::Locale;
///
/// assert_eq!(format_distance(0.35, Locale::Ro), "350 m distanță");
/// assert_eq!(format_distance(2.34, Locale::En), "2.3 km away");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "converting kilometres to metres multiplies by a constant"
)]
pub fn format_distance(km: f64, locale: Locale) -> String {
    let strings = LocaleStrings::for_locale(locale);
    if km < 1.0 {
        strings.metres((km * 1000.0).round())
    } else {
        strings.kilometres(km)
    }
}
