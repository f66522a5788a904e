//! Candidate scoring: curation bias, keyword matches, proximity, snippets.

use geo::Coord;
use hoinar_core::geodesy::haversine_km;
use hoinar_core::{Review, ReviewsByVenue, Venue, text};
use thiserror::Error;

use crate::strings::LocaleStrings;

/// Comments beyond this many characters are truncated in snippets.
const SNIPPET_LIMIT: usize = 90;
/// Truncated snippets keep exactly this many characters plus an ellipsis.
const SNIPPET_KEEP: usize = 87;

/// Tunable scoring constants.
///
/// The defaults reproduce the shipped behaviour; none of the values is
/// derived from a stated requirement, so they stay configurable rather
/// than baked in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoringWeights {
    /// Curation-order bias lost per list position.
    pub index_bias_step: f64,
    /// Upper bound of the curation-order bias.
    pub index_bias_cap: f64,
    /// Score added for every keyword found in a venue's searchable text.
    pub keyword_bonus: f64,
    /// Proximity bonus for a venue at the user's exact position.
    pub proximity_max: f64,
    /// Kilometres per unit of proximity bonus lost; the bonus reaches zero
    /// at `proximity_max * proximity_falloff_km`.
    pub proximity_falloff_km: f64,
}

impl ScoringWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`InvalidWeightsError`] naming the first weight that is not
    /// finite or is negative.
    pub fn validate(self) -> Result<Self, InvalidWeightsError> {
        for (name, value) in self.named_values() {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidWeightsError { name, value });
            }
        }
        Ok(self)
    }

    const fn named_values(self) -> [(&'static str, f64); 5] {
        [
            ("index_bias_step", self.index_bias_step),
            ("index_bias_cap", self.index_bias_cap),
            ("keyword_bonus", self.keyword_bonus),
            ("proximity_max", self.proximity_max),
            ("proximity_falloff_km", self.proximity_falloff_km),
        ]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            index_bias_step: 0.02,
            index_bias_cap: 5.0,
            keyword_bonus: 3.0,
            proximity_max: 2.0,
            proximity_falloff_km: 30.0,
        }
    }
}

/// A scoring weight was unusable.
#[derive(Debug, Error)]
#[error("scoring weight {name} must be finite and non-negative, got {value}")]
pub struct InvalidWeightsError {
    /// Name of the offending weight.
    pub name: &'static str,
    /// Value that failed validation.
    pub value: f64,
}

/// Review snippet attributed to its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snippet {
    pub author: String,
    pub text: String,
}

/// A venue paired with everything one scoring pass derived about it.
#[derive(Debug, Clone)]
pub(crate) struct ScoredCandidate<'a> {
    pub venue: &'a Venue,
    pub score: f64,
    pub matched_keywords: Vec<String>,
    pub snippet: Option<Snippet>,
    pub proximity: Option<String>,
}

/// Score every venue against the extracted keywords.
///
/// Venues keep their list order; the index feeds the curation bias and the
/// later stable sort preserves it for equal scores.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "scoring blends rating, curation bias, and distance with bounded casts"
)]
pub(crate) fn score_candidates<'a>(
    venues: &'a [Venue],
    keywords: &[String],
    reviews: &ReviewsByVenue,
    user_location: Option<Coord<f64>>,
    weights: &ScoringWeights,
    strings: &LocaleStrings,
) -> Vec<ScoredCandidate<'a>> {
    venues
        .iter()
        .enumerate()
        .map(|(index, venue)| {
            let position = index as f64;
            let bias = (weights.index_bias_cap
                - (position * weights.index_bias_step).min(weights.index_bias_cap))
            .max(0.0);
            let mut score = f64::from(venue.rating) + bias;

            let venue_reviews = reviews.get(&venue.id).map_or(&[][..], Vec::as_slice);
            let searchable = searchable_text(venue, venue_reviews);

            let mut matched_keywords: Vec<String> = Vec::new();
            for keyword in keywords {
                if searchable.contains(keyword.as_str()) {
                    score += weights.keyword_bonus;
                    if !matched_keywords.contains(keyword) {
                        matched_keywords.push(keyword.clone());
                    }
                }
            }

            let mut proximity = None;
            if let Some(user) = user_location {
                let distance = haversine_km(user, venue.location);
                score += (weights.proximity_max - distance / weights.proximity_falloff_km).max(0.0);
                proximity = Some(strings.kilometres(distance));
            }

            let snippet = venue_reviews.first().map(|review| Snippet {
                author: review.author_name(strings.anonymous_author).to_owned(),
                text: snippet_text(&review.comment),
            });

            ScoredCandidate {
                venue,
                score,
                matched_keywords,
                snippet,
                proximity,
            }
        })
        .collect()
}

fn searchable_text(venue: &Venue, venue_reviews: &[Review]) -> String {
    let mut parts: Vec<&str> = vec![
        venue.name.as_str(),
        venue.address.as_str(),
        venue.description.as_str(),
    ];
    parts.extend(venue_reviews.iter().map(|review| review.comment.as_str()));
    text::normalise(&parts.join(" "))
}

/// Trim a review comment and cap it for display.
///
/// Comments beyond 90 characters keep exactly 87 and gain an ellipsis;
/// everything shorter passes through verbatim. Lengths are measured in
/// characters, not bytes, so diacritics never split.
fn snippet_text(comment: &str) -> String {
    let trimmed = comment.trim();
    if trimmed.chars().count() > SNIPPET_LIMIT {
        let mut cut: String = trimmed.chars().take(SNIPPET_KEEP).collect();
        cut.push('…');
        cut
    } else {
        trimmed.to_owned()
    }
}
