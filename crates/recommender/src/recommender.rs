//! # Recommender
//!
//! This module turns a [`RecommendationRequest`] into recommendations:
//! 1. Start from every catalog row
//! 2. Apply the genre and rating filters
//! 3. Shuffle the survivors
//! 4. Walk them in shuffled order, skipping rows without an overview
//! 5. Score each overview's polarity and keep the rows whose sign class
//!    matches the mood's (every row when no mood was given)
//! 6. Stop at `top_n`
//!
//! The output keeps the shuffle order; nothing is ranked.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::error::RecommendError;
use crate::request::RecommendationRequest;
use data_loader::{Catalog, Movie, MovieId};
use nlp::{SentimentAnalyzer, same_sign_class};
use pipeline::filters::{GenreFilter, MinimumRatingFilter};
use pipeline::{Candidate, FilterPipeline};

/// One recommended movie
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub genre: String,
    pub rating: f32,
    /// Polarity of the movie's overview, in `[-1, 1]`
    pub polarity: f32,
}

impl Recommendation {
    fn from_movie(movie: &Movie, polarity: f32) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            rating: movie.rating,
            polarity,
        }
    }
}

/// Picks movies for a request out of a shared catalog
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    analyzer: SentimentAnalyzer,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            analyzer: SentimentAnalyzer::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend with a fresh thread-local RNG, so every call differs
    pub fn recommend_random(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        self.recommend(request, &mut rand::rng())
    }

    /// Main entry point: recommendations for `request`, shuffled with `rng`
    ///
    /// # Returns
    /// Up to `request.top_n` recommendations in shuffle order, or
    /// [`RecommendError::NoRecommendations`] when none qualify.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        request: &RecommendationRequest,
        rng: &mut R,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let start_time = Instant::now();

        let mut candidates = self.apply_filters(request)?;
        candidates.shuffle(rng);

        let recommendations = self.match_mood(&candidates, request);
        info!(
            "Selected {} of {} candidates in {:.2?}",
            recommendations.len(),
            candidates.len(),
            start_time.elapsed()
        );

        if recommendations.is_empty() {
            return Err(RecommendError::NoRecommendations);
        }
        Ok(recommendations)
    }

    /// Apply the request's genre and rating filters to the whole catalog
    fn apply_filters(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Candidate>, RecommendError> {
        let filter_pipeline = FilterPipeline::new()
            .add_optional_filter(request.genre_filter().map(GenreFilter::new))
            .add_optional_filter(request.rating_floor().map(MinimumRatingFilter::new));

        let candidates = Candidate::all(&self.catalog);
        info!(
            "Applying filters {:?} to {} candidates",
            filter_pipeline.filter_names(),
            candidates.len()
        );
        let filtered = filter_pipeline
            .apply(candidates, &self.catalog)
            .context("Failed to apply filters")?;
        info!("Filtering complete, {} candidates remain", filtered.len());

        Ok(filtered)
    }

    /// Walk `candidates` in order, keeping those whose overview polarity
    /// matches the mood, until `top_n` are kept
    fn match_mood(
        &self,
        candidates: &[Candidate],
        request: &RecommendationRequest,
    ) -> Vec<Recommendation> {
        let mood_polarity = request.mood_text().map(|mood| self.analyzer.polarity(mood));
        if let Some(mood_polarity) = mood_polarity {
            debug!("Mood polarity: {:.2}", mood_polarity);
        }

        let mut recommendations = Vec::with_capacity(request.top_n);
        for candidate in candidates {
            if recommendations.len() >= request.top_n {
                break;
            }
            let Some(movie) = self.catalog.get_movie(candidate.movie_id) else {
                continue;
            };
            if !movie.has_overview() {
                continue;
            }

            let polarity = self.analyzer.polarity(&movie.overview);
            let accepted = match mood_polarity {
                Some(mood_polarity) => same_sign_class(polarity, mood_polarity),
                None => true,
            };
            if accepted {
                recommendations.push(Recommendation::from_movie(movie, polarity));
            }
        }
        recommendations
    }
}
