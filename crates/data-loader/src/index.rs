//! Catalog loading and genre listing.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::collections::BTreeSet;
use std::path::Path;

impl Catalog {
    /// Load the catalog from a CSV file
    ///
    /// This is the main entry point for loading data. Every row comes back
    /// with non-null overview and genre strings and a numeric rating.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading movie catalog from {:?}", path);

        let movies = parser::parse_catalog(path)?;
        let catalog = Catalog { movies };

        let without_overview = catalog
            .movies
            .iter()
            .filter(|movie| !movie.has_overview())
            .count();
        tracing::info!(
            "Loaded {} movies ({} without an overview)",
            catalog.len(),
            without_overview
        );

        Ok(catalog)
    }

    /// Distinct genre labels across the catalog, sorted
    ///
    /// Each row's genre field is split on commas and trimmed; blank labels
    /// are dropped.
    pub fn list_genres(&self) -> Vec<String> {
        let genres: BTreeSet<&str> = self
            .movies
            .iter()
            .flat_map(|movie| movie.genre_labels())
            .collect();

        genres.into_iter().map(str::to_string).collect()
    }
}
