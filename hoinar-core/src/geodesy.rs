//! Great-circle distances and map regions.
//!
//! Distances use the haversine formula on a spherical Earth; the 6371 km
//! radius matches the value the mobile clients ship with, keeping displayed
//! distances consistent across surfaces.

use geo::{Coord, Rect};

use crate::Venue;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic centre of Romania, the map fallback when nothing is known.
pub const ROMANIA_CENTRE: Coord<f64> = Coord {
    x: 24.9668,
    y: 45.9432,
};

/// Span around the visitor's own position, in degrees.
const USER_SPAN_DEG: f64 = 0.3;
/// Whole-country span used when no venues are available, in degrees.
const COUNTRY_SPAN_DEG: f64 = 7.0;
/// Replacement span for a degenerate (single point) bounding box.
const FALLBACK_SPAN_DEG: f64 = 0.5;
/// Padding factor so markers do not sit on the viewport edge.
const SPAN_PADDING: f64 = 1.4;

/// Great-circle distance between two WGS84 coordinates in kilometres.
///
/// Symmetric, zero for identical coordinates, and approximately
/// `PI * EARTH_RADIUS_KM` for antipodal points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use hoinar_core::geodesy::haversine_km;
///
/// let cluj = Coord { x: 23.6236, y: 46.7712 };
/// let bucharest = Coord { x: 26.1025, y: 44.4268 };
/// let distance = haversine_km(cluj, bucharest);
/// assert!((distance - 324.23).abs() < 0.5);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is a floating point formula"
)]
#[must_use]
pub fn haversine_km(origin: Coord<f64>, destination: Coord<f64>) -> f64 {
    let delta_lat = (destination.y - origin.y).to_radians();
    let delta_lon = (destination.x - origin.x).to_radians();
    let origin_lat = origin.y.to_radians();
    let destination_lat = destination.y.to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + (delta_lon / 2.0).sin().powi(2) * origin_lat.cos() * destination_lat.cos();
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * angle
}

/// Round a distance to one decimal, the precision shown to users.
#[expect(clippy::float_arithmetic, reason = "fixed-precision rounding")]
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A map viewport: centre plus latitude/longitude spans in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    /// Viewport centre (WGS84, `x = longitude`).
    pub centre: Coord<f64>,
    /// North-south span in degrees.
    pub latitude_delta: f64,
    /// East-west span in degrees.
    pub longitude_delta: f64,
}

/// Compute the viewport for a venue list and an optional visitor position.
///
/// A known visitor position wins and gets a close-up span; otherwise the
/// region covers the venues' bounding box with padding, falling back to a
/// whole-country view when the list is empty.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use hoinar_core::geodesy::map_region;
///
/// let here = Coord { x: 23.6236, y: 46.7712 };
/// let region = map_region(&[], Some(here));
/// assert_eq!(region.centre, here);
/// assert!((region.latitude_delta - 0.3).abs() < 1e-9);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "viewport spans are derived from coordinate ranges"
)]
#[must_use]
pub fn map_region(venues: &[Venue], user: Option<Coord<f64>>) -> MapRegion {
    if let Some(centre) = user {
        return MapRegion {
            centre,
            latitude_delta: USER_SPAN_DEG,
            longitude_delta: USER_SPAN_DEG,
        };
    }

    let merged = venues
        .iter()
        .fold(None, |bounds, venue| Some(merge_bounds(bounds, venue.location)));
    let Some(bounds) = merged else {
        return MapRegion {
            centre: ROMANIA_CENTRE,
            latitude_delta: COUNTRY_SPAN_DEG,
            longitude_delta: COUNTRY_SPAN_DEG,
        };
    };

    let min = bounds.min();
    let max = bounds.max();
    MapRegion {
        centre: bounds.center(),
        latitude_delta: padded_span(max.y - min.y),
        longitude_delta: padded_span(max.x - min.x),
    }
}

/// Grow a bounding box to include `location`, or start one from it.
fn merge_bounds(bounds: Option<Rect<f64>>, location: Coord<f64>) -> Rect<f64> {
    bounds.map_or_else(
        || Rect::new(location, location),
        |rect| {
            let min = rect.min();
            let max = rect.max();
            Rect::new(
                Coord {
                    x: min.x.min(location.x),
                    y: min.y.min(location.y),
                },
                Coord {
                    x: max.x.max(location.x),
                    y: max.y.max(location.y),
                },
            )
        },
    )
}

#[expect(
    clippy::float_arithmetic,
    reason = "span padding multiplies a coordinate range"
)]
fn padded_span(span: f64) -> f64 {
    let base = if span > 0.0 { span } else { FALLBACK_SPAN_DEG };
    base * SPAN_PADDING
}
