//! Filter to enforce the user's minimum rating.

use crate::traits::{Candidate, Filter};
use anyhow::Result;
use data_loader::Catalog;

/// Removes candidates rated below a floor.
///
/// Movies whose rating was missing in the catalog carry `0.0` and are only
/// kept by a floor of zero.
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Lowest rating kept, inclusive (0-10 scale)
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, catalog: &Catalog) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(movie) = catalog.get_movie(candidate.movie_id) {
                    movie.rating >= self.min_rating
                } else {
                    false
                }
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
        let ratings = [9.0, 8.0, 7.9, 0.0];
        Catalog::from_movies(
            ratings
                .iter()
                .map(|&rating| Movie {
                    id: 0,
                    title: format!("Rated {}", rating),
                    genre: "Drama".to_string(),
                    overview: "Something happens".to_string(),
                    rating,
                })
                .collect(),
        )
    }

    #[test]
    fn test_minimum_rating_filter_is_inclusive() {
        let catalog = create_test_catalog();

        let filter = MinimumRatingFilter::new(8.0);
        let filtered = filter.apply(Candidate::all(&catalog), &catalog).unwrap();

        assert_eq!(filtered, vec![Candidate::new(0), Candidate::new(1)]);
    }

    #[test]
    fn test_zero_floor_keeps_unrated() {
        let catalog = create_test_catalog();

        let filter = MinimumRatingFilter::new(0.0);
        let filtered = filter.apply(Candidate::all(&catalog), &catalog).unwrap();

        assert_eq!(filtered.len(), 4);
    }
}
