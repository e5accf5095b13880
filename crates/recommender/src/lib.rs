//! Recommender crate for the cinemood assistant.
//!
//! This crate contains the recommender that turns a user's genre, mood and
//! rating floor into a short, randomized list of matching movies.

pub mod error;
pub mod recommender;
pub mod request;

pub use error::RecommendError;
pub use recommender::{Recommendation, Recommender};
pub use request::{DEFAULT_TOP_N, RecommendationRequest};
