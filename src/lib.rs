//! Facade crate for the hoinar venue recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the catalog and
//! concierge implementations behind feature flags.

#![forbid(unsafe_code)]

pub use hoinar_core::{
    Locale, MapRegion, ParseLocaleError, RecommendRequest, Recommender, Review, ReviewsByVenue,
    Venue,
};

#[cfg(feature = "catalog")]
pub use hoinar_catalog::{
    CatalogError, NearbyPartition, RankedVenue, ReviewStore, VenueCatalog, Visit, filter_by_rating,
    load_venues, partition,
};

#[cfg(feature = "concierge")]
pub use hoinar_concierge::{
    InvalidWeightsError, LocaleStrings, ScoringWeights, VenueConcierge, extract_keywords,
    format_distance,
};
