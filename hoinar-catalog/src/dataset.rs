//! Loading and normalising the curated venue dataset.

use std::io::Read;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use geo::Coord;
use hoinar_core::{Venue, text};
use log::info;
use serde::Deserialize;

use crate::error::CatalogError;

/// Venue record as stored in the dataset file.
#[derive(Debug, Deserialize)]
struct RawVenue {
    name: String,
    address: String,
    coordinates: RawCoordinates,
    #[serde(default)]
    image_url: String,
    short_description: String,
    rating: f32,
}

#[derive(Debug, Deserialize)]
struct RawCoordinates {
    lat: f64,
    long: f64,
}

/// Load the venue dataset at `path` and normalise it into [`Venue`] values.
///
/// Records keep their file order; earlier entries are treated as more
/// strongly curated by the recommender. Each venue id is the slug of its
/// name with the record position appended, so reloading the same file
/// yields the same ids.
///
/// # Errors
/// Returns [`CatalogError::Open`] when the file cannot be read and
/// [`CatalogError::Parse`] when its contents are not a valid venue array.
pub fn load_venues(path: &Utf8Path) -> Result<Vec<Venue>, CatalogError> {
    let mut file =
        fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            CatalogError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let records: Vec<RawVenue> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let venues: Vec<Venue> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| venue_from_record(index, record))
        .collect();
    info!("loaded {} venues from {path}", venues.len());
    Ok(venues)
}

fn venue_from_record(index: usize, record: RawVenue) -> Venue {
    let id = format!("{}-{index}", text::slugify(&record.name));
    let location = Coord {
        x: record.coordinates.long,
        y: record.coordinates.lat,
    };
    Venue::new(
        id,
        record.name,
        record.address,
        record.short_description,
        record.rating,
        location,
    )
    .with_image_url(record.image_url)
}
