use thiserror::Error;

/// Why a recommendation request produced no list
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Nothing in the catalog satisfied the request
    #[error("No suitable movie recommendations found.")]
    NoRecommendations,

    /// A pipeline filter failed
    #[error(transparent)]
    Pipeline(#[from] anyhow::Error),
}
