//! Core domain types for the hoinar recommendation engine.
//!
//! The crate defines the venue and review models, the locale surface shared
//! by every user-facing string, text normalisation helpers, great-circle
//! geometry, and the [`Recommender`] trait implemented by concierges.

#![forbid(unsafe_code)]

pub mod geodesy;
pub mod text;

mod locale;
mod recommend;
mod review;
mod venue;

pub use geodesy::MapRegion;
pub use locale::{Locale, ParseLocaleError};
pub use recommend::{RecommendRequest, Recommender};
pub use review::{Review, ReviewsByVenue};
pub use venue::Venue;
