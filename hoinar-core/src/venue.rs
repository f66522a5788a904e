use geo::Coord;

/// A venue that can be recommended.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// candidate list a request carries preserves curation order; earlier
/// entries are considered better curated.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use hoinar_core::Venue;
///
/// let venue = Venue::new(
///     "cafeneaua-veche-9-0".into(),
///     "Cafeneaua Veche 9".into(),
///     "Strada Veche 9, Cluj-Napoca".into(),
///     "cafenea liniștită cu specialitate".into(),
///     4.7,
///     Coord { x: 23.5899, y: 46.7712 },
/// );
///
/// assert_eq!(venue.city(), "Cluj-Napoca");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Venue {
    /// Stable identifier, unique within one dataset.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Full address; the city is the last comma-separated segment.
    pub address: String,
    /// Short free-text description.
    pub description: String,
    /// Curated rating in `0.0..=5.0`.
    pub rating: f32,
    /// Geographic position.
    pub location: Coord<f64>,
    /// Illustrative photo URL; empty when none is known.
    pub image_url: String,
}

impl Venue {
    /// Construct a venue without an image.
    #[must_use]
    pub const fn new(
        id: String,
        name: String,
        address: String,
        description: String,
        rating: f32,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id,
            name,
            address,
            description,
            rating,
            location,
            image_url: String::new(),
        }
    }

    /// Attach a photo URL while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_image_url(mut self, image_url: String) -> Self {
        self.image_url = image_url;
        self
    }

    /// The city parsed from the address: its last comma-separated segment,
    /// trimmed. An address without a comma is returned whole.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use hoinar_core::Venue;
    ///
    /// let venue = Venue::new(
    ///     "v-0".into(),
    ///     "Aria".into(),
    ///     "Bulevardul Eroilor 12, Brașov".into(),
    ///     "bistro".into(),
    ///     4.5,
    ///     Coord { x: 25.5887, y: 45.6427 },
    /// );
    /// assert_eq!(venue.city(), "Brașov");
    /// ```
    #[must_use]
    pub fn city(&self) -> &str {
        self.address.rsplit(',').next().unwrap_or("").trim()
    }
}
