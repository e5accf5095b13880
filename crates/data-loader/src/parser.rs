//! Parser for the movie catalog CSV.
//!
//! The catalog is a header-first, comma-delimited file. Columns are matched
//! by header name, so their order does not matter and extra columns (poster
//! links, runtimes, cast...) are ignored. Both the IMDB export headers and a
//! plain lowercase layout are accepted:
//!
//! | field    | headers                    |
//! |----------|----------------------------|
//! | title    | `Series_Title`, `title`    |
//! | genre    | `Genre`, `genre`           |
//! | overview | `Overview`, `overview`     |
//! | rating   | `IMDB_Rating`, `rating`    |
//!
//! Empty or missing values never fail a row: text defaults to `""` and the
//! rating to `0.0` (also when it is not a number).

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use serde::Deserialize;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Raw shape of one CSV row before defaults are applied
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(rename = "Series_Title", alias = "title", default)]
    title: Option<String>,
    #[serde(rename = "Genre", alias = "genre", default)]
    genre: Option<String>,
    #[serde(rename = "Overview", alias = "overview", default)]
    overview: Option<String>,
    #[serde(
        rename = "IMDB_Rating",
        alias = "rating",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    rating: Option<f32>,
}

impl CatalogRecord {
    fn into_movie(self, id: usize) -> Movie {
        Movie {
            id,
            title: self.title.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
            rating: self.rating.filter(|r| r.is_finite()).unwrap_or(0.0),
        }
    }
}

/// Parse the catalog file at `path`
///
/// Returns [`DataLoadError::FileNotFound`] when nothing exists at `path`.
pub fn parse_catalog(path: &Path) -> Result<Vec<Movie>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_catalog_reader(file, &file_name)
}

/// Parse catalog rows from any reader.
///
/// `file_name` is only used in error messages.
pub fn parse_catalog_reader<R: Read>(reader: R, file_name: &str) -> Result<Vec<Movie>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut movies = Vec::new();
    for (idx, record) in csv_reader.deserialize::<CatalogRecord>().enumerate() {
        let record = record.map_err(|e| csv_error(e, file_name))?;
        movies.push(record.into_movie(idx));
    }

    tracing::debug!("Parsed {} catalog rows from {}", movies.len(), file_name);
    Ok(movies)
}

fn csv_error(err: csv::Error, file_name: &str) -> DataLoadError {
    let line = err.position().map(|pos| pos.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => DataLoadError::IoError(io),
        _ => DataLoadError::CsvError {
            file: file_name.to_string(),
            line,
            reason,
        },
    }
}
