use std::collections::BTreeMap;

/// Reviews grouped by venue identifier.
///
/// Each group is ordered most recent first; the first entry feeds the reply's
/// local-tip snippet.
pub type ReviewsByVenue = BTreeMap<String, Vec<Review>>;

/// An end-user review of a venue.
///
/// # Examples
/// ```
/// use hoinar_core::Review;
///
/// let review = Review::new("v-0".into(), 4.5, "Excelent pentru lucru.".into(), 1_700_000_000)
///     .with_author("Ana".into());
/// assert_eq!(review.author_name("Anonim"), "Ana");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Review {
    /// Identifier of the reviewed venue.
    pub venue_id: String,
    /// Display name of the reviewer; `None` for anonymous reviews.
    pub author: Option<String>,
    /// Star rating in `0.0..=5.0`.
    pub rating: f32,
    /// Free-text comment.
    pub comment: String,
    /// Creation time as unix seconds.
    pub created_at: i64,
}

impl Review {
    /// Construct an anonymous review.
    #[must_use]
    pub const fn new(venue_id: String, rating: f32, comment: String, created_at: i64) -> Self {
        Self {
            venue_id,
            author: None,
            rating,
            comment,
            created_at,
        }
    }

    /// Attach an author name while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_author(mut self, author: String) -> Self {
        self.author = Some(author);
        self
    }

    /// The author's display name, or `anonymous` when the review has none.
    #[must_use]
    pub fn author_name<'a>(&'a self, anonymous: &'a str) -> &'a str {
        self.author.as_deref().unwrap_or(anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn anonymous_reviews_use_placeholder() {
        let review = Review::new("v-0".into(), 5.0, "super".into(), 0);
        assert_eq!(review.author_name("Guest"), "Guest");
    }

    #[rstest]
    fn named_reviews_keep_author() {
        let review = Review::new("v-0".into(), 5.0, "super".into(), 0).with_author("Mihai".into());
        assert_eq!(review.author_name("Guest"), "Mihai");
    }
}
