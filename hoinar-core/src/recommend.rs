use geo::Coord;

use crate::{Locale, ReviewsByVenue, Venue};

/// Inputs for a single recommendation.
///
/// The request borrows the candidate list and review map; recommenders
/// allocate only for their reply.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use hoinar_core::{Locale, RecommendRequest, ReviewsByVenue};
///
/// let reviews = ReviewsByVenue::new();
/// let request = RecommendRequest {
///     prompt: "cafea liniștită",
///     venues: &[],
///     reviews: &reviews,
///     user_location: Some(Coord { x: 23.6236, y: 46.7712 }),
///     locale: Locale::Ro,
/// };
/// assert_eq!(request.locale, Locale::Ro);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecommendRequest<'a> {
    /// Free-text description of what the visitor wants.
    pub prompt: &'a str,
    /// Candidate venues in curation order.
    pub venues: &'a [Venue],
    /// Reviews grouped by venue id, most recent first within each group.
    pub reviews: &'a ReviewsByVenue,
    /// Optional visitor position (WGS84, `x = longitude`).
    pub user_location: Option<Coord<f64>>,
    /// Locale for every fixed string in the reply.
    pub locale: Locale,
}

/// Produce a localised recommendation reply for a request.
///
/// Implementations are total: they never panic and never fail. Degraded
/// inputs (empty prompts, empty candidate lists, missing reviews) produce
/// fallback messages rather than errors. Recommenders must be thread-safe
/// (`Send + Sync`) so one instance can serve concurrent requests.
///
/// # Examples
///
/// ```rust
/// use hoinar_core::{Locale, RecommendRequest, Recommender, ReviewsByVenue};
///
/// struct FixedReply;
///
/// impl Recommender for FixedReply {
///     fn recommend(&self, _request: &RecommendRequest<'_>) -> String {
///         "nimic încă".to_owned()
///     }
/// }
///
/// let reviews = ReviewsByVenue::new();
/// let request = RecommendRequest {
///     prompt: "cafea",
///     venues: &[],
///     reviews: &reviews,
///     user_location: None,
///     locale: Locale::Ro,
/// };
/// assert_eq!(FixedReply.recommend(&request), "nimic încă");
/// ```
pub trait Recommender: Send + Sync {
    /// Build the reply for `request`.
    fn recommend(&self, request: &RecommendRequest<'_>) -> String;
}
