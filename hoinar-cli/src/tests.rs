//! Focused unit tests covering CLI parsing, configuration, and commands.

use std::fs;

use camino::Utf8PathBuf;
use clap::Parser;
use hoinar_core::{Locale, ReviewsByVenue};
use rstest::rstest;
use tempfile::TempDir;

use crate::nearby::{self, NearbyArgs};
use crate::recommend::{self, RecommendArgs, RecommendConfig};
use crate::seed::{self, SeedArgs};
use crate::{
    ARG_DATASET, ARG_PROMPT, Cli, CliError, Command, ENV_RECOMMEND_DATASET, ENV_RECOMMEND_PROMPT,
};

const DATASET: &str = r#"[
  {
    "name": "Cafeneaua Veche 9",
    "address": "Strada Veche 9, Cluj-Napoca",
    "coordinates": { "lat": 46.7712, "long": 23.6236 },
    "short_description": "cafea de specialitate și prăjituri",
    "rating": 4.7
  },
  {
    "name": "Hanul Berarilor",
    "address": "Strada Republicii 14, Brașov",
    "coordinates": { "lat": 45.6427, "long": 25.5887 },
    "short_description": "bere artizanală și grătar",
    "rating": 4.4
  },
  {
    "name": "Veranda",
    "address": "Bulevardul Unirii 20, București",
    "coordinates": { "lat": 44.4268, "long": 26.1025 },
    "short_description": "terasă cu muzică live",
    "rating": 4.1
  }
]"#;

fn write_dataset(dir: &TempDir) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("venues.json")).expect("utf8 path");
    fs::write(&path, DATASET).expect("write dataset");
    path
}

#[rstest]
fn parses_recommend_arguments() {
    let cli = Cli::try_parse_from([
        "hoinar",
        "recommend",
        "cafea liniștită",
        "--dataset",
        "venues.json",
        "--lat",
        "46.77",
        "--lon",
        "23.62",
        "--locale",
        "en",
        "--seed",
        "7",
    ])
    .expect("arguments parse");
    let Command::Recommend(args) = cli.command else {
        panic!("expected the recommend subcommand");
    };
    assert_eq!(args.prompt.as_deref(), Some("cafea liniștită"));
    assert_eq!(args.dataset, Some(Utf8PathBuf::from("venues.json")));
    assert_eq!(args.locale.as_deref(), Some("en"));
    assert_eq!(args.seed, Some(7));
}

#[rstest]
fn latitude_requires_longitude_on_the_command_line() {
    let result = Cli::try_parse_from([
        "hoinar",
        "recommend",
        "cafea",
        "--dataset",
        "venues.json",
        "--lat",
        "46.77",
    ]);
    assert!(result.is_err(), "--lat without --lon should be rejected");
}

#[rstest]
#[case(
    None,
    Some(Utf8PathBuf::from("venues.json")),
    ARG_PROMPT,
    ENV_RECOMMEND_PROMPT
)]
#[case(
    Some("cafea".to_owned()),
    None,
    ARG_DATASET,
    ENV_RECOMMEND_DATASET
)]
fn converting_without_required_fields_errors(
    #[case] prompt: Option<String>,
    #[case] dataset: Option<Utf8PathBuf>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = RecommendArgs {
        prompt,
        dataset,
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn lone_coordinates_are_rejected_after_merging() {
    let args = RecommendArgs {
        prompt: Some("cafea".to_owned()),
        dataset: Some(Utf8PathBuf::from("venues.json")),
        lat: Some(46.77),
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("lone latitude should error");
    assert!(matches!(err, CliError::IncompleteCoordinates));
}

#[rstest]
fn unsupported_locales_are_rejected() {
    let args = RecommendArgs {
        prompt: Some("cafea".to_owned()),
        dataset: Some(Utf8PathBuf::from("venues.json")),
        locale: Some("xx".to_owned()),
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("unknown locale should error");
    match err {
        CliError::UnsupportedLocale { value, .. } => assert_eq!(value, "xx"),
        other => panic!("expected UnsupportedLocale, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_dataset() {
    let tmp = TempDir::new().expect("tempdir");
    let config = RecommendConfig {
        prompt: "cafea".to_owned(),
        dataset: Utf8PathBuf::from_path_buf(tmp.path().join("missing.json")).expect("utf8 path"),
        reviews_db: None,
        user_location: None,
        locale: Locale::Ro,
        seed: None,
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_DATASET),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn recommend_writes_the_reply() {
    let tmp = TempDir::new().expect("tempdir");
    let dataset = write_dataset(&tmp);
    let args = RecommendArgs {
        prompt: Some("cafea".to_owned()),
        dataset: Some(dataset),
        seed: Some(7),
        ..RecommendArgs::default()
    };
    let mut output = Vec::new();

    recommend::run_recommend_with(args, &mut output).expect("recommend succeeds");

    let text = String::from_utf8(output).expect("utf8 output");
    assert!(text.contains("Cafeneaua Veche 9"), "output: {text}");
    assert!(text.ends_with('\n'));
}

#[rstest]
fn nearby_lists_closest_venues_first() {
    let tmp = TempDir::new().expect("tempdir");
    let dataset = write_dataset(&tmp);
    let args = NearbyArgs {
        dataset: Some(dataset),
        lat: Some(46.7712),
        lon: Some(23.6236),
        limit: Some(2),
        ..NearbyArgs::default()
    };
    let mut output = Vec::new();

    nearby::run_nearby_with(args, &mut output).expect("nearby succeeds");

    let text = String::from_utf8(output).expect("utf8 output");
    assert!(text.contains("• Cafeneaua Veche 9 (Cluj-Napoca) · 0 m distanță"));
    assert!(text.contains("• Hanul Berarilor (Brașov) · 196.5 km distanță"));
    assert!(text.contains("• Veranda (București) · 324.2 km distanță"));
    assert!(text.contains("\n\n"), "sections separated by a blank line");
    let cluj = text.find("Cafeneaua").expect("closest venue listed");
    let brasov = text.find("Hanul").expect("second venue listed");
    let bucharest = text.find("Veranda").expect("remainder venue listed");
    assert!(cluj < brasov && brasov < bucharest);
}

#[rstest]
fn nearby_filters_by_minimum_rating() {
    let tmp = TempDir::new().expect("tempdir");
    let dataset = write_dataset(&tmp);
    let args = NearbyArgs {
        dataset: Some(dataset),
        min_rating: Some(4.5),
        ..NearbyArgs::default()
    };
    let mut output = Vec::new();

    nearby::run_nearby_with(args, &mut output).expect("nearby succeeds");

    let text = String::from_utf8(output).expect("utf8 output");
    assert_eq!(text, "• Cafeneaua Veche 9 (Cluj-Napoca)\n");
}

#[rstest]
fn seed_populates_the_review_store() {
    let tmp = TempDir::new().expect("tempdir");
    let dataset = write_dataset(&tmp);
    let db = Utf8PathBuf::from_path_buf(tmp.path().join("reviews.db")).expect("utf8 path");
    let args = SeedArgs {
        dataset: Some(dataset),
        reviews_db: Some(db.clone()),
        seed: Some(7),
    };
    let mut output = Vec::new();

    seed::run_seed_with(args, &mut output).expect("seed succeeds");

    let text = String::from_utf8(output).expect("utf8 output");
    assert!(
        text.starts_with("seeded 3 reviews, 2 favourites, 2 visits"),
        "output: {text}"
    );
    let store = hoinar_catalog::ReviewStore::open(&db).expect("reopen store");
    assert_eq!(store.reviews_by_venue().expect("list reviews").len(), 3);
    assert_eq!(store.favourites().expect("list favourites").len(), 2);
    assert_eq!(store.visits().expect("list visits").len(), 2);
}

#[rstest]
fn seeded_runs_are_reproducible() {
    let tmp = TempDir::new().expect("tempdir");
    let dataset = write_dataset(&tmp);
    let mut sink = Vec::new();

    let mut stores = Vec::new();
    for name in ["left.db", "right.db"] {
        let db = Utf8PathBuf::from_path_buf(tmp.path().join(name)).expect("utf8 path");
        let args = SeedArgs {
            dataset: Some(dataset.clone()),
            reviews_db: Some(db.clone()),
            seed: Some(42),
        };
        seed::run_seed_with(args, &mut sink).expect("seed succeeds");
        stores.push(hoinar_catalog::ReviewStore::open(&db).expect("reopen store"));
    }

    let flatten = |reviews: ReviewsByVenue| -> Vec<(String, Option<String>, String)> {
        reviews
            .into_iter()
            .flat_map(|(venue_id, entries)| {
                entries
                    .into_iter()
                    .map(move |review| (venue_id.clone(), review.author, review.comment))
            })
            .collect()
    };
    let left = flatten(
        stores
            .first()
            .expect("first store")
            .reviews_by_venue()
            .expect("list reviews"),
    );
    let right = flatten(
        stores
            .get(1)
            .expect("second store")
            .reviews_by_venue()
            .expect("list reviews"),
    );
    assert_eq!(left, right);
}
