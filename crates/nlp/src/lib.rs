//! Text analysis for the movie catalog.
//!
//! This crate provides:
//! - `similarity`: TF-IDF vectors and the all-pairs cosine similarity matrix
//! - `sentiment`: lexicon-based polarity scoring in `[-1, 1]`
//! - `tokenize`: the tokenizers both of them share
//!
//! ## Example Usage
//! ```ignore
//! use nlp::{SentimentAnalyzer, SimilarityMatrix};
//!
//! let matrix = SimilarityMatrix::build(&catalog.combined_texts())?;
//! let polarity = SentimentAnalyzer::new().polarity("I feel great");
//! ```

pub mod sentiment;
pub mod similarity;
pub mod tokenize;

// Re-export main types
pub use sentiment::{same_sign_class, Sentiment, SentimentAnalyzer};
pub use similarity::{SimilarityError, SimilarityMatrix};
