//! Property-based tests for the recommendation flow.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! requests, complementing the example-driven behaviour tests.
//!
//! # Invariants tested
//!
//! - **Totality:** Every request produces a non-empty reply.
//! - **Shortlist bound:** A reply never presents more than two venues.
//! - **Blank prompts:** Whitespace-only prompts always ask for details.
//! - **Determinism:** Replies with at least one surviving venue ignore the
//!   random source entirely.
//! - **Pool membership:** Unmatched keyword prompts answer with one of the
//!   locale's fallback messages.

use geo::Coord;
use hoinar_concierge::{LocaleStrings, VenueConcierge};
use hoinar_core::{Locale, RecommendRequest, Recommender, ReviewsByVenue, Venue};
use proptest::prelude::*;

fn sample_venues() -> Vec<Venue> {
    vec![
        Venue::new(
            "cafeneaua-veche-9-0".to_owned(),
            "Cafeneaua Veche 9".to_owned(),
            "Strada Veche 9, Cluj-Napoca".to_owned(),
            "cafea de specialitate și prăjituri".to_owned(),
            4.7,
            Coord {
                x: 23.6236,
                y: 46.7712,
            },
        ),
        Venue::new(
            "hanul-berarilor-1".to_owned(),
            "Hanul Berarilor".to_owned(),
            "Strada Republicii 14, Brașov".to_owned(),
            "bere artizanală și grătar".to_owned(),
            4.4,
            Coord {
                x: 25.5887,
                y: 45.6427,
            },
        ),
        Venue::new(
            "veranda-2".to_owned(),
            "Veranda".to_owned(),
            "Bulevardul Unirii 20, București".to_owned(),
            "terasă cu muzică live".to_owned(),
            4.1,
            Coord {
                x: 26.1025,
                y: 44.4268,
            },
        ),
    ]
}

fn locale_strategy() -> impl Strategy<Value = Locale> {
    prop_oneof![Just(Locale::Ro), Just(Locale::En)]
}

fn reply_for(seed: u64, prompt: &str, venues: &[Venue], locale: Locale) -> String {
    let reviews = ReviewsByVenue::new();
    VenueConcierge::seeded(seed).recommend(&RecommendRequest {
        prompt,
        venues,
        reviews: &reviews,
        user_location: None,
        locale,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every request yields a non-empty reply.
    ///
    /// The concierge is total over its inputs; whatever the prompt or
    /// catalogue, some message comes back.
    #[test]
    fn every_request_yields_a_reply(
        seed in any::<u64>(),
        prompt in ".{0,80}",
        venue_count in 0_usize..=3,
        locale in locale_strategy(),
    ) {
        let venues = sample_venues();
        let subset = venues.get(..venue_count).unwrap_or(&venues);

        let reply = reply_for(seed, &prompt, subset, locale);

        prop_assert!(!reply.is_empty(), "empty reply for prompt {prompt:?}");
    }

    /// Property: a reply presents at most two venues.
    ///
    /// Venue blocks are the only lines starting with a bullet, so counting
    /// bullets counts venues.
    #[test]
    fn replies_present_at_most_two_venues(
        seed in any::<u64>(),
        prompt in ".{0,80}",
        locale in locale_strategy(),
    ) {
        let venues = sample_venues();

        let reply = reply_for(seed, &prompt, &venues, locale);

        prop_assert!(
            reply.matches('•').count() <= 2,
            "more than two venues in: {reply}"
        );
    }

    /// Property: whitespace-only prompts always ask for details.
    ///
    /// The prompt check precedes every other branch, including the empty
    /// catalogue reply.
    #[test]
    fn blank_prompts_always_ask_for_details(
        seed in any::<u64>(),
        prompt in "[ \t\r\n]{0,10}",
        venue_count in 0_usize..=3,
        locale in locale_strategy(),
    ) {
        let venues = sample_venues();
        let subset = venues.get(..venue_count).unwrap_or(&venues);

        let reply = reply_for(seed, &prompt, subset, locale);

        prop_assert_eq!(reply, LocaleStrings::for_locale(locale).ask_for_details);
    }

    /// Property: replies with a surviving venue ignore the random source.
    ///
    /// Only the no-match fallback draws randomness; any prompt that matches
    /// a venue must produce identical replies across differently seeded
    /// concierges.
    #[test]
    fn matched_replies_ignore_the_seed(
        left_seed in any::<u64>(),
        right_seed in any::<u64>(),
        locale in locale_strategy(),
    ) {
        let venues = sample_venues();

        let left = reply_for(left_seed, "cafea", &venues, locale);
        let right = reply_for(right_seed, "cafea", &venues, locale);

        prop_assert_eq!(left, right);
    }

    /// Property: prompts whose keywords match nothing answer from the pool.
    ///
    /// Tokens built from `q`, `w`, and `x` can never occur in the sample
    /// venue text, so every such prompt takes the fallback branch.
    #[test]
    fn unmatched_prompts_answer_from_the_pool(
        seed in any::<u64>(),
        token in "[qwx]{3,10}",
        locale in locale_strategy(),
    ) {
        let venues = sample_venues();
        let pool = LocaleStrings::for_locale(locale).no_match_pool;

        let reply = reply_for(seed, &token, &venues, locale);

        prop_assert!(
            pool.contains(&reply.as_str()),
            "reply {reply:?} is not a fallback message"
        );
    }
}
