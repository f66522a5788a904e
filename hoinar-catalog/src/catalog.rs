//! Explicit cache around the venue dataset.

use camino::{Utf8Path, Utf8PathBuf};
use hoinar_core::Venue;

use crate::dataset::load_venues;
use crate::error::CatalogError;

/// Cached view over a venue dataset file.
///
/// The catalogue reads the dataset lazily on the first
/// [`VenueCatalog::venues`] call and serves the cached slice afterwards.
/// Cache state stays explicit: callers inspect it with
/// [`VenueCatalog::is_loaded`], drop it with [`VenueCatalog::invalidate`],
/// or pick up fresh file contents with [`VenueCatalog::refresh`].
#[derive(Debug)]
pub struct VenueCatalog {
    path: Utf8PathBuf,
    venues: Option<Vec<Venue>>,
}

impl VenueCatalog {
    /// Create a catalogue backed by the dataset at `path` without reading it.
    #[must_use]
    pub fn open(path: &Utf8Path) -> Self {
        Self {
            path: path.to_path_buf(),
            venues: None,
        }
    }

    /// Borrow the venues, loading the dataset on first use.
    ///
    /// # Errors
    /// Propagates [`CatalogError`] when the dataset cannot be read or parsed;
    /// the cache stays empty so a later call retries the load.
    pub fn venues(&mut self) -> Result<&[Venue], CatalogError> {
        if self.venues.is_none() {
            self.venues = Some(load_venues(&self.path)?);
        }
        Ok(self.venues.as_deref().unwrap_or_default())
    }

    /// Drop the cached venues; the next [`Self::venues`] call re-reads the file.
    pub fn invalidate(&mut self) {
        self.venues = None;
    }

    /// Invalidate and reload in one step.
    ///
    /// # Errors
    /// Propagates [`CatalogError`] from the reload.
    pub fn refresh(&mut self) -> Result<&[Venue], CatalogError> {
        self.invalidate();
        self.venues()
    }

    /// Report whether the dataset is currently cached.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.venues.is_some()
    }

    /// Path of the backing dataset file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
