//! Seed command implementation for the hoinar CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use hoinar_catalog::{ReviewStore, load_venues};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATASET, ARG_REVIEWS_DB, CliError, ENV_SEED_DATASET, ENV_SEED_REVIEWS_DB, require_existing,
};

/// Review authors drawn for demonstration content; `None` seeds an
/// anonymous review.
const DEMO_AUTHORS: &[Option<&str>] = &[
    Some("Radu"),
    Some("Ioana"),
    Some("Mihai"),
    Some("Elena"),
    None,
];

const DEMO_COMMENTS: &[&str] = &[
    "Atmosferă caldă, personal prietenos. Revenim cu drag.",
    "Cafeaua a fost excelentă, iar desertul pe măsură.",
    "Loc liniștit, perfect pentru lucru sau citit.",
    "Porții generoase și prețuri corecte.",
    "Muzica un pic cam tare seara, altfel minunat.",
    "Terasa are o priveliște superbă la apus.",
];

const FAVOURITE_COUNT: usize = 2;

/// CLI arguments for the `seed` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Populate a review database with demonstration reviews, \
                 favourites, and visits for every venue in the dataset. The \
                 database is created when it does not exist.",
    about = "Populate a review database with demonstration content"
)]
#[ortho_config(prefix = "HOINAR")]
pub(crate) struct SeedArgs {
    /// Path to the venue dataset (JSON).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Path to the review database to create or extend.
    #[arg(long = ARG_REVIEWS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) reviews_db: Option<Utf8PathBuf>,
    /// Seed for the drawn authors and comments, for reproducible content.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl SeedArgs {
    pub(crate) fn into_config(self) -> Result<SeedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SeedConfig::try_from(merged)
    }
}

/// Resolved `seed` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SeedConfig {
    /// Path to the venue dataset.
    pub(crate) dataset: Utf8PathBuf,
    /// Path to the review database.
    pub(crate) reviews_db: Utf8PathBuf,
    /// Optional seed for the random draws.
    pub(crate) seed: Option<u64>,
}

impl SeedConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)
    }
}

impl TryFrom<SeedArgs> for SeedConfig {
    type Error = CliError;

    fn try_from(args: SeedArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_SEED_DATASET,
        })?;
        let reviews_db = args.reviews_db.ok_or(CliError::MissingArgument {
            field: ARG_REVIEWS_DB,
            env: ENV_SEED_REVIEWS_DB,
        })?;
        Ok(Self {
            dataset,
            reviews_db,
            seed: args.seed,
        })
    }
}

pub(super) fn run_seed(args: SeedArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_seed_with(args, &mut stdout)
}

pub(super) fn run_seed_with(args: SeedArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_seed_config(args)?;
    let venues = load_venues(&config.dataset)?;
    let store = ReviewStore::open(&config.reviews_db)?;
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    for venue in &venues {
        let author = DEMO_AUTHORS.choose(&mut rng).copied().unwrap_or(None);
        let comment = DEMO_COMMENTS
            .choose(&mut rng)
            .copied()
            .unwrap_or("Merită încercat.");
        let rating = f32::from(rng.gen_range(7_u8..=10)) / 2.0;
        store.upsert_review(&venue.id, author, rating, comment)?;
    }

    let favourites: Vec<_> = venues
        .choose_multiple(&mut rng, FAVOURITE_COUNT.min(venues.len()))
        .collect();
    for venue in &favourites {
        store.add_favourite(&venue.id)?;
        store.record_visit(&venue.id)?;
    }

    writeln!(
        writer,
        "seeded {} reviews, {} favourites, {} visits into {}",
        venues.len(),
        favourites.len(),
        favourites.len(),
        config.reviews_db
    )?;
    Ok(())
}

fn resolve_seed_config(args: SeedArgs) -> Result<SeedConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}
