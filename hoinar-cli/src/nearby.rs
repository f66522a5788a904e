//! Nearby command implementation for the hoinar CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use hoinar_catalog::{RankedVenue, filter_by_rating, load_venues, partition};
use hoinar_concierge::format_distance;
use hoinar_core::Locale;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATASET, CliError, ENV_NEARBY_DATASET, coordinate_from, locale_from, require_existing,
};

/// Venues listed in the closest section when no limit is given.
const DEFAULT_LIMIT: usize = 3;

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List venues ranked by distance from a position. Without a \
                 position the dataset order is kept and no distances are \
                 shown.",
    about = "List venues ranked by distance"
)]
#[ortho_config(prefix = "HOINAR")]
pub(crate) struct NearbyArgs {
    /// Path to the venue dataset (JSON).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Your latitude in decimal degrees.
    #[arg(long, value_name = "deg", requires = "lon", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Your longitude in decimal degrees.
    #[arg(long, value_name = "deg", requires = "lat", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// How many venues the closest section holds.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Hide venues rated below this value.
    #[arg(long, value_name = "rating")]
    #[serde(default)]
    pub(crate) min_rating: Option<f32>,
    /// Distance language (`ro` or `en`).
    #[arg(long, value_name = "code")]
    #[serde(default)]
    pub(crate) locale: Option<String>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    /// Path to the venue dataset.
    pub(crate) dataset: Utf8PathBuf,
    /// Optional visitor position.
    pub(crate) user_location: Option<Coord<f64>>,
    /// Size of the closest section.
    pub(crate) limit: usize,
    /// Minimum rating kept in the listing.
    pub(crate) min_rating: f32,
    /// Distance language.
    pub(crate) locale: Locale,
}

impl NearbyConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)
    }
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_NEARBY_DATASET,
        })?;
        let user_location = coordinate_from(args.lat, args.lon)?;
        let locale = locale_from(args.locale.as_deref())?;
        Ok(Self {
            dataset,
            user_location,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            min_rating: args.min_rating.unwrap_or(0.0),
            locale,
        })
    }
}

pub(super) fn run_nearby(args: NearbyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearby_with(args, &mut stdout)
}

pub(super) fn run_nearby_with(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_nearby_config(args)?;
    let venues = load_venues(&config.dataset)?;
    let filtered = filter_by_rating(&venues, config.min_rating);
    let ranked = partition(&filtered, config.user_location, config.limit);

    write_section(writer, &ranked.closest, config.locale)?;
    if !ranked.closest.is_empty() && !ranked.remainder.is_empty() {
        writeln!(writer)?;
    }
    write_section(writer, &ranked.remainder, config.locale)?;
    Ok(())
}

fn resolve_nearby_config(args: NearbyArgs) -> Result<NearbyConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn write_section(
    writer: &mut dyn Write,
    section: &[RankedVenue],
    locale: Locale,
) -> Result<(), CliError> {
    for entry in section {
        let mut line = format!("• {}", entry.venue.name);
        let city = entry.venue.city();
        if !city.is_empty() {
            line.push_str(&format!(" ({city})"));
        }
        if let Some(km) = entry.distance_km {
            line.push_str(&format!(" · {}", format_distance(km, locale)));
        }
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
