//! Distance-based ranking over the venue list.

use geo::Coord;
use hoinar_core::Venue;
use hoinar_core::geodesy::{haversine_km, round_to_tenth};

/// A venue annotated with its rounded distance from the user, when known.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedVenue {
    /// The underlying venue.
    pub venue: Venue,
    /// Great-circle distance in kilometres, rounded to 0.1 km.
    pub distance_km: Option<f64>,
}

/// Venues split into the closest shortlist and the remainder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearbyPartition {
    /// The closest venues, nearest first, at most the requested limit.
    pub closest: Vec<RankedVenue>,
    /// Every other venue, also nearest first.
    pub remainder: Vec<RankedVenue>,
}

/// Partition `venues` into the `limit` closest to `user` and the rest.
///
/// With a user coordinate every venue is annotated with its distance from
/// the user, rounded to 0.1 km, and the whole list is ordered nearest
/// first; ties at that precision keep dataset order. Without one the split
/// degenerates: `closest` stays empty and `remainder` preserves dataset
/// order with no distances.
#[must_use]
pub fn partition(venues: &[Venue], user: Option<Coord<f64>>, limit: usize) -> NearbyPartition {
    let Some(origin) = user else {
        return NearbyPartition {
            closest: Vec::new(),
            remainder: venues
                .iter()
                .map(|venue| RankedVenue {
                    venue: venue.clone(),
                    distance_km: None,
                })
                .collect(),
        };
    };

    let mut measured: Vec<(f64, &Venue)> = venues
        .iter()
        .map(|venue| (round_to_tenth(haversine_km(origin, venue.location)), venue))
        .collect();
    measured.sort_by(|left, right| left.0.total_cmp(&right.0));

    let mut ranked: Vec<RankedVenue> = measured
        .into_iter()
        .map(|(distance, venue)| RankedVenue {
            venue: venue.clone(),
            distance_km: Some(distance),
        })
        .collect();
    let remainder = ranked.split_off(limit.min(ranked.len()));
    NearbyPartition {
        closest: ranked,
        remainder,
    }
}

/// Keep only venues rated at or above `minimum`.
///
/// A minimum of zero or below keeps everything, matching the "any rating"
/// position of the rating picker (whose other steps are 4.0 and 4.5).
#[must_use]
pub fn filter_by_rating(venues: &[Venue], minimum: f32) -> Vec<Venue> {
    if minimum <= 0.0 {
        return venues.to_vec();
    }
    venues
        .iter()
        .filter(|venue| venue.rating >= minimum)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use geo::Coord;
    use hoinar_core::Venue;
    use rstest::rstest;

    use super::{filter_by_rating, partition};

    const CLUJ: Coord<f64> = Coord {
        x: 23.6236,
        y: 46.7712,
    };

    fn venue(name: &str, lon: f64, lat: f64, rating: f32) -> Venue {
        Venue::new(
            name.to_lowercase(),
            name.to_owned(),
            format!("Strada Mare 1, {name}"),
            String::new(),
            rating,
            Coord { x: lon, y: lat },
        )
    }

    fn sample_venues() -> Vec<Venue> {
        vec![
            venue("Bucuresti", 26.1025, 44.4268, 4.4),
            venue("Cluj", 23.6236, 46.7712, 4.8),
            venue("Brasov", 25.5887, 45.6427, 4.6),
        ]
    }

    #[rstest]
    fn without_user_keeps_dataset_order() {
        let venues = sample_venues();

        let split = partition(&venues, None, 2);

        assert!(split.closest.is_empty());
        let names: Vec<&str> = split
            .remainder
            .iter()
            .map(|ranked| ranked.venue.name.as_str())
            .collect();
        assert_eq!(names, ["Bucuresti", "Cluj", "Brasov"]);
        assert!(split.remainder.iter().all(|r| r.distance_km.is_none()));
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test uses float maths for assertions"
    )]
    fn ranks_by_distance_with_rounded_values() {
        let venues = sample_venues();

        let split = partition(&venues, Some(CLUJ), 2);

        let closest: Vec<(&str, f64)> = split
            .closest
            .iter()
            .map(|ranked| {
                (
                    ranked.venue.name.as_str(),
                    ranked.distance_km.expect("distance"),
                )
            })
            .collect();
        assert_eq!(closest.len(), 2);
        let (first_name, first_distance) = closest.first().expect("nearest venue");
        assert_eq!(*first_name, "Cluj");
        assert!(first_distance.abs() < f64::EPSILON);
        let (second_name, second_distance) = closest.get(1).expect("second venue");
        assert_eq!(*second_name, "Brasov");
        assert!((second_distance - 196.5).abs() < 1e-9);

        let remainder = split.remainder.first().expect("remainder venue");
        assert_eq!(remainder.venue.name, "Bucuresti");
        let distance = remainder.distance_km.expect("distance");
        assert!((distance - 324.2).abs() < 1e-9);
    }

    #[rstest]
    fn ties_at_display_precision_keep_dataset_order() {
        let venues = vec![
            venue("Intai", 23.6236, 46.7712, 4.0),
            venue("AlDoilea", 23.6236, 46.7712, 4.0),
        ];

        let split = partition(&venues, Some(CLUJ), 2);

        let names: Vec<&str> = split
            .closest
            .iter()
            .map(|ranked| ranked.venue.name.as_str())
            .collect();
        assert_eq!(names, ["Intai", "AlDoilea"]);
    }

    #[rstest]
    fn limit_beyond_length_leaves_empty_remainder() {
        let venues = sample_venues();

        let split = partition(&venues, Some(CLUJ), 10);

        assert_eq!(split.closest.len(), 3);
        assert!(split.remainder.is_empty());
    }

    #[rstest]
    #[case(0.0, 3)]
    #[case(4.0, 3)]
    #[case(4.5, 2)]
    #[case(4.7, 1)]
    fn filters_by_minimum_rating(#[case] minimum: f32, #[case] expected: usize) {
        let venues = vec![
            venue("Unu", 23.0, 46.0, 4.8),
            venue("Doi", 23.1, 46.1, 4.5),
            venue("Trei", 23.2, 46.2, 4.0),
        ];

        let kept = filter_by_rating(&venues, minimum);

        assert_eq!(kept.len(), expected);
    }

    #[rstest]
    fn negative_minimum_keeps_unrated_venues() {
        let venues = vec![venue("Zero", 23.0, 46.0, 0.0)];

        let kept = filter_by_rating(&venues, -1.0);

        assert_eq!(kept.len(), 1);
    }
}
