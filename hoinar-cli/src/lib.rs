//! Command-line interface for the hoinar venue tooling.
#![forbid(unsafe_code)]

use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use geo::Coord;
use hoinar_catalog::CatalogError;
use hoinar_core::{Locale, ParseLocaleError};
use thiserror::Error;

mod nearby;
mod recommend;
mod seed;

use nearby::NearbyArgs;
use recommend::RecommendArgs;
use seed::SeedArgs;

const ARG_DATASET: &str = "dataset";
const ARG_PROMPT: &str = "prompt";
const ARG_REVIEWS_DB: &str = "reviews-db";
const ENV_RECOMMEND_DATASET: &str = "HOINAR_CMDS_RECOMMEND_DATASET";
const ENV_RECOMMEND_PROMPT: &str = "HOINAR_CMDS_RECOMMEND_PROMPT";
const ENV_NEARBY_DATASET: &str = "HOINAR_CMDS_NEARBY_DATASET";
const ENV_SEED_DATASET: &str = "HOINAR_CMDS_SEED_DATASET";
const ENV_SEED_REVIEWS_DB: &str = "HOINAR_CMDS_SEED_REVIEWS_DB";

/// Run the hoinar CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot
/// be resolved, or a command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
        Command::Nearby(args) => nearby::run_nearby(args),
        Command::Seed(args) => seed::run_seed(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "hoinar",
    about = "Offline venue recommendation utilities for the hoinar engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend venues for a free-text prompt.
    Recommend(RecommendArgs),
    /// List venues ranked by distance from a position.
    Nearby(NearbyArgs),
    /// Populate a review database with demonstration content.
    Seed(SeedArgs),
}

/// Errors emitted by the hoinar CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Only one of the latitude and longitude options was supplied.
    #[error("set both --lat and --lon, or neither")]
    IncompleteCoordinates,
    /// The locale code is not one the engine ships strings for.
    #[error("unsupported locale {value:?}")]
    UnsupportedLocale {
        value: String,
        #[source]
        source: ParseLocaleError,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The venue dataset or review database failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[from] std::io::Error),
}

fn require_existing(path: &Utf8PathBuf, field: &'static str) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.clone(),
        })
    }
}

/// Pair a latitude and longitude into a coordinate.
///
/// Clap enforces the pairing on the command line, but values merged from
/// the environment or a configuration file can still arrive alone.
fn coordinate_from(lat: Option<f64>, lon: Option<f64>) -> Result<Option<Coord<f64>>, CliError> {
    match (lat, lon) {
        (Some(y), Some(x)) => Ok(Some(Coord { x, y })),
        (None, None) => Ok(None),
        _ => Err(CliError::IncompleteCoordinates),
    }
}

fn locale_from(code: Option<&str>) -> Result<Locale, CliError> {
    code.map_or(Ok(Locale::default()), |value| {
        value.parse().map_err(|source| CliError::UnsupportedLocale {
            value: value.to_owned(),
            source,
        })
    })
}

#[cfg(test)]
mod tests;
