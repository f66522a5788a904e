//! Recommend command implementation for the hoinar CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use hoinar_catalog::{ReviewStore, load_venues};
use hoinar_concierge::VenueConcierge;
use hoinar_core::{Locale, RecommendRequest, Recommender, ReviewsByVenue};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATASET, ARG_PROMPT, ARG_REVIEWS_DB, CliError, ENV_RECOMMEND_DATASET,
    ENV_RECOMMEND_PROMPT, coordinate_from, locale_from, require_existing,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend venues for a free-text prompt. Venues come from \
                 a JSON dataset; pass a review database produced by `hoinar \
                 seed` to enrich replies with review snippets.",
    about = "Recommend venues for a free-text prompt"
)]
#[ortho_config(prefix = "HOINAR")]
pub(crate) struct RecommendArgs {
    /// Free-text description of what you are looking for.
    #[arg(value_name = "prompt")]
    #[serde(default)]
    pub(crate) prompt: Option<String>,
    /// Path to the venue dataset (JSON).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Path to a review database produced by `hoinar seed`.
    #[arg(long = ARG_REVIEWS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) reviews_db: Option<Utf8PathBuf>,
    /// Your latitude in decimal degrees.
    #[arg(long, value_name = "deg", requires = "lon", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Your longitude in decimal degrees.
    #[arg(long, value_name = "deg", requires = "lat", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Reply language (`ro` or `en`).
    #[arg(long, value_name = "code")]
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Seed for the fallback reply choice, for reproducible output.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Free-text prompt to answer.
    pub(crate) prompt: String,
    /// Path to the venue dataset.
    pub(crate) dataset: Utf8PathBuf,
    /// Optional review database enriching the reply.
    pub(crate) reviews_db: Option<Utf8PathBuf>,
    /// Optional visitor position.
    pub(crate) user_location: Option<Coord<f64>>,
    /// Reply language.
    pub(crate) locale: Locale,
    /// Optional seed for the fallback reply choice.
    pub(crate) seed: Option<u64>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)?;
        if let Some(path) = &self.reviews_db {
            require_existing(path, ARG_REVIEWS_DB)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let prompt = args.prompt.ok_or(CliError::MissingArgument {
            field: ARG_PROMPT,
            env: ENV_RECOMMEND_PROMPT,
        })?;
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_RECOMMEND_DATASET,
        })?;
        let user_location = coordinate_from(args.lat, args.lon)?;
        let locale = locale_from(args.locale.as_deref())?;
        Ok(Self {
            prompt,
            dataset,
            reviews_db: args.reviews_db,
            user_location,
            locale,
            seed: args.seed,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let venues = load_venues(&config.dataset)?;
    let reviews = match &config.reviews_db {
        Some(path) => ReviewStore::open(path)?.reviews_by_venue()?,
        None => ReviewsByVenue::new(),
    };
    let concierge = match config.seed {
        Some(seed) => VenueConcierge::seeded(seed),
        None => VenueConcierge::new(),
    };
    let reply = concierge.recommend(&RecommendRequest {
        prompt: &config.prompt,
        venues: &venues,
        reviews: &reviews,
        user_location: config.user_location,
        locale: config.locale,
    });
    writeln!(writer, "{reply}")?;
    Ok(())
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}
