//! SQLite persistence for reviews, favourites, and visit history.

use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use hoinar_core::{Review, ReviewsByVenue};
use rusqlite::{Connection, params};

use crate::error::CatalogError;

/// Persisted user-generated content: reviews, favourites, and visits.
///
/// Opening a store runs idempotent schema setup, so a fresh database file
/// and an existing one are handled the same way. One review is kept per
/// `(venue, author)` pair; anonymous reviews are never coalesced.
#[derive(Debug)]
pub struct ReviewStore {
    connection: Connection,
}

/// A recorded visit to a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Identifier of the visited venue.
    pub venue_id: String,
    /// Unix seconds at which the visit was recorded.
    pub visited_at: i64,
}

impl ReviewStore {
    /// Open (or create) the review database at the supplied path.
    ///
    /// # Errors
    /// Returns [`CatalogError::OpenStore`] when the database cannot be
    /// opened and [`CatalogError::Store`] when schema setup fails.
    pub fn open(path: &Utf8Path) -> Result<Self, CatalogError> {
        let connection =
            Connection::open(path.as_std_path()).map_err(|source| CatalogError::OpenStore {
                path: path.to_path_buf(),
                source,
            })?;
        initialise_schema(&connection)?;
        Ok(Self { connection })
    }

    /// Open a transient in-memory store, mainly for tests and demos.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] when the database cannot be created.
    pub fn open_in_memory() -> Result<Self, CatalogError> {
        let connection = Connection::open_in_memory().map_err(|source| CatalogError::Store {
            operation: "open in-memory review database",
            source,
        })?;
        initialise_schema(&connection)?;
        Ok(Self { connection })
    }

    /// Insert or update a review for `(venue_id, author)`.
    ///
    /// A named author keeps a single review per venue: conflicts replace
    /// the stored rating, comment, and timestamp. Anonymous reviews
    /// (`author == None`) always insert a new row.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] when the statement fails or the
    /// system clock reports a pre-epoch time.
    pub fn upsert_review(
        &self,
        venue_id: &str,
        author: Option<&str>,
        rating: f32,
        comment: &str,
    ) -> Result<(), CatalogError> {
        let created_at = unix_seconds("timestamp review")?;
        self.connection
            .execute(
                "INSERT INTO reviews (venue_id, author, rating, comment, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT (venue_id, author) DO UPDATE SET
                     rating = excluded.rating,
                     comment = excluded.comment,
                     created_at = excluded.created_at",
                params![venue_id, author, rating, comment, created_at],
            )
            .map_err(|source| CatalogError::Store {
                operation: "record review",
                source,
            })?;
        Ok(())
    }

    /// List the reviews for one venue, most recent first.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] when the query fails.
    pub fn reviews_for(&self, venue_id: &str) -> Result<Vec<Review>, CatalogError> {
        let mut statement = self
            .connection
            .prepare_cached(
                "SELECT venue_id, author, rating, comment, created_at
                 FROM reviews
                 WHERE venue_id = ?1
                 ORDER BY created_at DESC, id DESC",
            )
            .map_err(|source| CatalogError::Store {
                operation: "prepare review listing",
                source,
            })?;
        let rows = statement
            .query_map(params![venue_id], review_from_row)
            .map_err(|source| CatalogError::Store {
                operation: "list venue reviews",
                source,
            })?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|source| CatalogError::Store {
                operation: "read review rows",
                source,
            })
    }

    /// Group every stored review by venue id, most recent first per venue.
    ///
    /// This is the review-map input of the recommender.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] when the query fails.
    pub fn reviews_by_venue(&self) -> Result<ReviewsByVenue, CatalogError> {
        let mut statement = self
            .connection
            .prepare_cached(
                "SELECT venue_id, author, rating, comment, created_at
                 FROM reviews
                 ORDER BY venue_id, created_at DESC, id DESC",
            )
            .map_err(|source| CatalogError::Store {
                operation: "prepare grouped review listing",
                source,
            })?;
        let rows = statement
            .query_map([], review_from_row)
            .map_err(|source| CatalogError::Store {
                operation: "list grouped reviews",
                source,
            })?;

        let mut grouped = ReviewsByVenue::new();
        for row in rows {
            let review = row.map_err(|source| CatalogError::Store {
                operation: "read review rows",
                source,
            })?;
            grouped
                .entry(review.venue_id.clone())
                .or_default()
                .push(review);
        }
        Ok(grouped)
    }

    /// Mark a venue as a favourite; returns whether it was newly added.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] when the statement fails or the
    /// system clock reports a pre-epoch time.
    pub fn add_favourite(&self, venue_id: &str) -> Result<bool, CatalogError> {
        let created_at = unix_seconds("timestamp favourite")?;
        let changed = self
            .connection
            .execute(
                "INSERT OR IGNORE INTO favourites (venue_id, created_at) VALUES (?1, ?2)",
                params![venue_id, created_at],
            )
            .map_err(|source| CatalogError::Store {
                operation: "record favourite",
                source,
            })?;
        Ok(changed > 0)
    }

    /// Remove a favourite; returns whether anything was removed.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] when the statement fails.
    pub fn remove_favourite(&self, venue_id: &str) -> Result<bool, CatalogError> {
        let changed = self
            .connection
            .execute(
                "DELETE FROM favourites WHERE venue_id = ?1",
                params![venue_id],
            )
            .map_err(|source| CatalogError::Store {
                operation: "remove favourite",
                source,
            })?;
        Ok(changed > 0)
    }

    /// List favourite venue ids in the order they were added.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] when the query fails.
    pub fn favourites(&self) -> Result<Vec<String>, CatalogError> {
        let mut statement = self
            .connection
            .prepare_cached("SELECT venue_id FROM favourites ORDER BY id")
            .map_err(|source| CatalogError::Store {
                operation: "prepare favourite listing",
                source,
            })?;
        let rows = statement
            .query_map([], |row| row.get(0))
            .map_err(|source| CatalogError::Store {
                operation: "list favourites",
                source,
            })?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|source| CatalogError::Store {
                operation: "read favourite rows",
                source,
            })
    }

    /// Record a visit to a venue at the current time.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] when the statement fails or the
    /// system clock reports a pre-epoch time.
    pub fn record_visit(&self, venue_id: &str) -> Result<(), CatalogError> {
        let visited_at = unix_seconds("timestamp visit")?;
        self.connection
            .execute(
                "INSERT INTO visits (venue_id, visited_at) VALUES (?1, ?2)",
                params![venue_id, visited_at],
            )
            .map_err(|source| CatalogError::Store {
                operation: "record visit",
                source,
            })?;
        Ok(())
    }

    /// List recorded visits, most recent first.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] when the query fails.
    pub fn visits(&self) -> Result<Vec<Visit>, CatalogError> {
        let mut statement = self
            .connection
            .prepare_cached(
                "SELECT venue_id, visited_at FROM visits ORDER BY visited_at DESC, id DESC",
            )
            .map_err(|source| CatalogError::Store {
                operation: "prepare visit listing",
                source,
            })?;
        let rows = statement
            .query_map([], |row| {
                Ok(Visit {
                    venue_id: row.get(0)?,
                    visited_at: row.get(1)?,
                })
            })
            .map_err(|source| CatalogError::Store {
                operation: "list visits",
                source,
            })?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|source| CatalogError::Store {
                operation: "read visit rows",
                source,
            })
    }
}

fn initialise_schema(connection: &Connection) -> Result<(), CatalogError> {
    create_table(
        connection,
        "create reviews table",
        "CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            venue_id TEXT NOT NULL,
            author TEXT,
            rating REAL NOT NULL,
            comment TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            UNIQUE (venue_id, author)
        )",
    )?;
    create_table(
        connection,
        "create favourites table",
        "CREATE TABLE IF NOT EXISTS favourites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            venue_id TEXT NOT NULL UNIQUE,
            created_at INTEGER NOT NULL
        )",
    )?;
    create_table(
        connection,
        "create visits table",
        "CREATE TABLE IF NOT EXISTS visits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            venue_id TEXT NOT NULL,
            visited_at INTEGER NOT NULL
        )",
    )
}

fn create_table(
    connection: &Connection,
    operation: &'static str,
    sql: &str,
) -> Result<(), CatalogError> {
    connection
        .execute(sql, [])
        .map(|_| ())
        .map_err(|source| CatalogError::Store { operation, source })
}

fn review_from_row(row: &rusqlite::Row<'_>) -> Result<Review, rusqlite::Error> {
    Ok(Review {
        venue_id: row.get(0)?,
        author: row.get(1)?,
        rating: row.get(2)?,
        comment: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn unix_seconds(operation: &'static str) -> Result<i64, CatalogError> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| CatalogError::Store {
            operation,
            source: rusqlite::Error::ToSqlConversionFailure(Box::new(err)),
        })?;
    i64::try_from(duration.as_secs()).map_err(|err| CatalogError::Store {
        operation,
        source: rusqlite::Error::ToSqlConversionFailure(Box::new(err)),
    })
}
