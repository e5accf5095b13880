//! # Data Loader Crate
//!
//! This crate loads the movie catalog into memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **parser**: Parse the catalog CSV into Rust structs
//! - **index**: Load a catalog from disk and list its genres
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("movies.csv"))?;
//!
//! for (idx, genre) in catalog.list_genres().iter().enumerate() {
//!     println!("{}. {}", idx + 1, genre);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Catalog, Movie, MovieId};

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, overview: &str) -> Movie {
        Movie {
            id: 42,
            title: title.to_string(),
            genre: "Comedy".to_string(),
            overview: overview.to_string(),
            rating: 7.0,
        }
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get_movie(0).is_none());
    }

    #[test]
    fn test_from_movies_assigns_positions() {
        let catalog = Catalog::from_movies(vec![movie("A", "x"), movie("B", "y")]);

        assert_eq!(catalog.movie_ids().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(catalog.get_movie(1).unwrap().title, "B");
    }

    #[test]
    fn test_push_movie() {
        let mut catalog = Catalog::new();

        let id = catalog.push(movie("A", "x"));

        assert_eq!(id, 0);
        assert_eq!(catalog.get_movie(id).unwrap().id, 0);
    }

    #[test]
    fn test_combined_texts() {
        let catalog = Catalog::from_movies(vec![movie("A", "A joyful romp"), movie("B", "")]);

        assert_eq!(catalog.combined_texts(), vec!["A joyful romp Comedy", " Comedy"]);
        assert!(catalog.movies()[0].has_overview());
        assert!(!catalog.movies()[1].has_overview());
    }
}
