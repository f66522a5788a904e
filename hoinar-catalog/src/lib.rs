//! Venue catalogue and review persistence for the hoinar engine.
//!
//! The crate provides three complementary capabilities:
//! - **Dataset loading** reads the curated venue dataset (a JSON array of
//!   snake_case records) and normalises each record into a
//!   [`Venue`](hoinar_core::Venue) with a position-stable slug identifier.
//!   [`VenueCatalog`] wraps the loader in an explicit cache so repeated
//!   lookups avoid re-reading the file while staying inspectable and
//!   invalidatable.
//! - **Nearby ranking** partitions venues by great-circle distance from a
//!   user coordinate and filters them by minimum rating, producing the
//!   list views consumers render around the recommendation flow.
//! - **Review persistence** stores user reviews, favourites, and visit
//!   history in a `SQLite` database and assembles the grouped
//!   [`ReviewsByVenue`](hoinar_core::ReviewsByVenue) map the recommender
//!   consumes.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use hoinar_catalog::{ReviewStore, VenueCatalog};
//!
//! # fn main() -> Result<(), hoinar_catalog::CatalogError> {
//! let mut catalog = VenueCatalog::open(Utf8Path::new("data/venues.json"));
//! let venues = catalog.venues()?;
//! let store = ReviewStore::open(Utf8Path::new("data/reviews.db"))?;
//! let reviews = store.reviews_by_venue()?;
//! println!("{} venues, {} reviewed", venues.len(), reviews.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod dataset;
mod error;
mod nearby;
mod store;

pub use catalog::VenueCatalog;
pub use dataset::load_venues;
pub use error::CatalogError;
pub use nearby::{NearbyPartition, RankedVenue, filter_by_rating, partition};
pub use store::{ReviewStore, Visit};
