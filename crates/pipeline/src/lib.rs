//! Pipeline for narrowing the catalog down to recommendation candidates.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! Every catalog row starts out as a [`Candidate`]. Filters drop the rows
//! that do not match the user's request (wrong genre, rating too low) and
//! keep the survivors in their original order; shuffling and sentiment
//! matching happen afterwards in the recommender.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Candidate, FilterPipeline};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(GenreFilter::new("comedy"))
//!     .add_filter(MinimumRatingFilter::new(8.0));
//!
//! let filtered = pipeline.apply(Candidate::all(&catalog), &catalog)?;
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::{Candidate, Filter};
pub use filter_pipeline::FilterPipeline;
