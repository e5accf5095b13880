//! Core domain types for the movie catalog.
//!
//! A catalog is a flat, read-only table of movies. Rows are addressed by
//! their position in the source file, which keeps them aligned with the
//! rows of any matrix built over [`Catalog::combined_texts`].

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a movie in the catalog (0-based, file order)
pub type MovieId = usize;

// =============================================================================
// Movie
// =============================================================================

/// One catalog row.
///
/// `genre` and `overview` are always present after loading; missing values
/// are stored as empty strings and a missing rating as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Comma-separated genre labels, exactly as they appear in the file
    /// (e.g. `"Crime, Drama"`)
    pub genre: String,
    pub overview: String,
    /// Rating on a 0-10 scale
    pub rating: f32,
}

impl Movie {
    /// The document used for content similarity: overview, a space, genre.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.overview, self.genre)
    }

    /// Iterate over the individual genre labels, trimmed, skipping blanks
    pub fn genre_labels(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    pub fn has_overview(&self) -> bool {
        !self.overview.is_empty()
    }
}

// =============================================================================
// Catalog - The In-Memory Table
// =============================================================================

/// The loaded movie table.
///
/// Owned once and shared read-only (usually behind an `Arc`) by the
/// filters and the recommender. Methods hand out references, never copies.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Build a catalog from movies already in memory.
    ///
    /// Ids are reassigned to match each movie's position so that lookups by
    /// [`MovieId`] stay valid.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let movies = movies
            .into_iter()
            .enumerate()
            .map(|(id, movie)| Movie { id, ..movie })
            .collect();
        Self { movies }
    }

    /// Get a movie by id
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// All movies in file order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All ids in file order
    pub fn movie_ids(&self) -> impl Iterator<Item = MovieId> + '_ {
        self.movies.iter().map(|movie| movie.id)
    }

    /// Combined overview + genre text of every row, in file order
    pub fn combined_texts(&self) -> Vec<String> {
        self.movies.iter().map(Movie::combined_text).collect()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Append a movie, assigning it the next id
    pub fn push(&mut self, movie: Movie) -> MovieId {
        let id = self.movies.len();
        self.movies.push(Movie { id, ..movie });
        id
    }
}
