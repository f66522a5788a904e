//! Venue recommendation concierge for the hoinar engine.
//!
//! The concierge turns a free-text prompt plus a venue list, grouped
//! reviews, and an optional user coordinate into a short, human-readable
//! recommendation. It is a pure function of its request: no IO, no clock,
//! no hidden state. The single nondeterministic choice, picking one of the
//! equivalent "no match" replies, draws from an injectable random source so
//! tests can pin it down.
//!
//! Scoring blends three signals: the venue's curated rating plus a small
//! bias favouring earlier dataset entries, a fixed bonus per extracted
//! keyword found in the venue's searchable text, and a proximity bonus
//! that decays with distance from the user. The two highest-scoring
//! survivors are rendered as the reply.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use hoinar_concierge::VenueConcierge;
//! use hoinar_core::{Locale, RecommendRequest, Recommender, ReviewsByVenue, Venue};
//!
//! let venues = vec![Venue::new(
//!     "cafeneaua-veche-9-0".to_owned(),
//!     "Cafeneaua Veche 9".to_owned(),
//!     "Strada Veche 9, Cluj-Napoca".to_owned(),
//!     "cafea de specialitate într-o curte liniștită".to_owned(),
//!     4.7,
//!     Coord { x: 23.6236, y: 46.7712 },
//! )];
//! let reviews = ReviewsByVenue::new();
//! let concierge = VenueConcierge::seeded(7);
//! let reply = concierge.recommend(&RecommendRequest {
//!     prompt: "cafea liniștită",
//!     venues: &venues,
//!     reviews: &reviews,
//!     user_location: None,
//!     locale: Locale::Ro,
//! });
//! assert!(reply.contains("Cafeneaua Veche 9"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::sync::Mutex;

use hoinar_core::{RecommendRequest, Recommender};
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod keywords;
mod reply;
mod scoring;
mod strings;

pub use keywords::extract_keywords;
pub use scoring::{InvalidWeightsError, ScoringWeights};
pub use strings::{LocaleStrings, format_distance};

use reply::{compose_reply, select_shortlist};
use scoring::score_candidates;

/// Keyword-and-proximity venue recommender.
///
/// The type parameter is the random source used to pick a "no match"
/// reply; it defaults to a [`ChaCha8Rng`] so [`VenueConcierge::seeded`]
/// can reproduce runs exactly. The source sits behind a mutex, keeping
/// [`Recommender::recommend`] callable through a shared reference from
/// multiple threads.
#[derive(Debug)]
pub struct VenueConcierge<R = ChaCha8Rng> {
    weights: ScoringWeights,
    rng: Mutex<R>,
}

impl VenueConcierge<ChaCha8Rng> {
    /// Create a concierge with default weights and an entropy-seeded
    /// random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Create a deterministic concierge for tests and reproducible demos.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for VenueConcierge<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> VenueConcierge<R> {
    /// Create a concierge drawing "no match" replies from `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            weights: ScoringWeights::default(),
            rng: Mutex::new(rng),
        }
    }

    /// Replace the scoring weights, validating them first.
    ///
    /// # Errors
    /// Returns [`InvalidWeightsError`] when any weight is non-finite or
    /// negative.
    pub fn with_weights(self, weights: ScoringWeights) -> Result<Self, InvalidWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
            rng: self.rng,
        })
    }

    /// The scoring weights in effect.
    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl<R: Rng> VenueConcierge<R> {
    fn no_match_message(&self, strings: &LocaleStrings) -> String {
        let first = strings
            .no_match_pool
            .first()
            .copied()
            .unwrap_or(strings.insufficient_data);
        let Ok(mut rng) = self.rng.lock() else {
            warn!("fallback message source is poisoned; using the first pool entry");
            return first.to_owned();
        };
        strings
            .no_match_pool
            .choose(&mut *rng)
            .copied()
            .unwrap_or(first)
            .to_owned()
    }
}

impl<R: Rng + Send> Recommender for VenueConcierge<R> {
    fn recommend(&self, request: &RecommendRequest<'_>) -> String {
        let strings = LocaleStrings::for_locale(request.locale);
        if request.prompt.trim().is_empty() {
            return strings.ask_for_details.to_owned();
        }
        if request.venues.is_empty() {
            return strings.insufficient_data.to_owned();
        }

        let keywords = extract_keywords(request.prompt, strings);
        let candidates = score_candidates(
            request.venues,
            &keywords,
            request.reviews,
            request.user_location,
            &self.weights,
            strings,
        );
        let shortlist = select_shortlist(candidates, !keywords.is_empty());
        debug!(
            "{} keywords, {} of {} venues shortlisted",
            keywords.len(),
            shortlist.len(),
            request.venues.len()
        );
        if shortlist.is_empty() {
            return self.no_match_message(strings);
        }
        compose_reply(&shortlist, &keywords, strings)
    }
}
