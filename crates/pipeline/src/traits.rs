//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use anyhow::Result;
use data_loader::{Catalog, MovieId};

/// A catalog row still in the running for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub movie_id: MovieId,
}

impl Candidate {
    pub fn new(movie_id: MovieId) -> Self {
        Self { movie_id }
    }

    /// Every row of the catalog, in file order
    pub fn all(catalog: &Catalog) -> Vec<Candidate> {
        catalog.movie_ids().map(Candidate::new).collect()
    }
}

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared behind an `Arc`
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filters must preserve the relative order of the candidates they keep
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `catalog` - The catalog the candidates point into
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The filtered candidates
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<Candidate>, catalog: &Catalog) -> Result<Vec<Candidate>>;
}
