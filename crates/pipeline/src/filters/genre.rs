//! Filter to keep only movies of the requested genre.

use crate::traits::{Candidate, Filter};
use anyhow::Result;
use data_loader::Catalog;

/// Keeps candidates whose genre string contains the requested genre.
///
/// ## Algorithm
/// Case-insensitive substring match against the whole comma-separated
/// genre field, so `"fi"` matches `"Sci-Fi"` and `"drama"` matches
/// `"Crime, Drama"`.
pub struct GenreFilter {
    needle: String,
}

impl GenreFilter {
    pub fn new(genre: impl AsRef<str>) -> Self {
        Self {
            needle: genre.as_ref().to_lowercase(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, catalog: &Catalog) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                catalog
                    .get_movie(candidate.movie_id)
                    .map(|movie| movie.genre.to_lowercase().contains(&self.needle))
                    .unwrap_or(false) // Exclude if movie not found
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    fn create_test_catalog() -> Catalog {
        let genres = ["Action, Adventure", "Crime, Drama", "Sci-Fi", ""];
        Catalog::from_movies(
            genres
                .iter()
                .map(|genre| Movie {
                    id: 0,
                    title: format!("{} Movie", genre),
                    genre: genre.to_string(),
                    overview: "Something happens".to_string(),
                    rating: 7.0,
                })
                .collect(),
        )
    }

    #[test]
    fn test_genre_filter_is_case_insensitive() {
        let catalog = create_test_catalog();

        let filter = GenreFilter::new("DRAMA");
        let filtered = filter.apply(Candidate::all(&catalog), &catalog).unwrap();

        assert_eq!(filtered, vec![Candidate::new(1)]);
    }

    #[test]
    fn test_genre_filter_matches_substrings() {
        let catalog = create_test_catalog();

        let filter = GenreFilter::new("fi");
        let filtered = filter.apply(Candidate::all(&catalog), &catalog).unwrap();

        assert_eq!(filtered, vec![Candidate::new(2)]);
    }

    #[test]
    fn test_unknown_movie_is_dropped() {
        let catalog = create_test_catalog();

        let filter = GenreFilter::new("action");
        let filtered = filter
            .apply(vec![Candidate::new(0), Candidate::new(99)], &catalog)
            .unwrap();

        assert_eq!(filtered, vec![Candidate::new(0)]);
    }
}
