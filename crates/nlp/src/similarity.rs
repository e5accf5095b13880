//! Content similarity between catalog documents.
//!
//! Documents are turned into TF-IDF vectors and compared pairwise with
//! cosine similarity:
//!
//! - tf: raw count of the term in the document
//! - idf: `ln((1 + n) / (1 + df)) + 1` (smoothed, so no term gets zero weight)
//! - each vector is L2-normalised, so cosine similarity is a plain dot product
//!
//! Weights are non-negative, so every similarity lies in `[0, 1]`.

use crate::tokenize;
use rayon::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SimilarityError {
    /// No document produced a single term after stop-word removal
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,
}

/// Sparse L2-normalised TF-IDF vector, entries sorted by term index
#[derive(Debug, Clone, Default)]
struct TermVector {
    entries: Vec<(usize, f32)>,
}

impl TermVector {
    /// Dot product of two sorted sparse vectors
    fn dot(&self, other: &TermVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_term, a_weight) = self.entries[i];
            let (b_term, b_weight) = other.entries[j];
            match a_term.cmp(&b_term) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Dense all-pairs cosine similarity matrix.
///
/// Row and column `i` correspond to the `i`-th document passed to
/// [`SimilarityMatrix::build`].
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    vocabulary_len: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Vectorize `documents` and compute every pairwise cosine similarity
    pub fn build(documents: &[String]) -> Result<Self, SimilarityError> {
        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| tokenize::terms(doc))
            .collect();

        // Vocabulary in first-seen order, document frequency per term
        let mut vocabulary: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: Vec<u32> = Vec::new();
        for terms in &tokenized {
            let mut seen: Vec<usize> = Vec::with_capacity(terms.len());
            for term in terms {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term.as_str()).or_insert(next);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                seen.push(idx);
            }
            seen.sort_unstable();
            seen.dedup();
            for idx in seen {
                doc_freq[idx] += 1;
            }
        }

        if vocabulary.is_empty() {
            return Err(SimilarityError::EmptyVocabulary);
        }

        let n_docs = documents.len() as f32;
        let idf: Vec<f32> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let vectors: Vec<TermVector> = tokenized
            .par_iter()
            .map(|terms| vectorize(terms, &vocabulary, &idf))
            .collect();

        let size = vectors.len();
        let vectors = &vectors;
        let values: Vec<f32> = (0..size)
            .into_par_iter()
            .flat_map_iter(|i| {
                let row = &vectors[i];
                vectors.iter().map(move |other| row.dot(other).clamp(0.0, 1.0))
            })
            .collect();

        tracing::info!(
            "Built {}x{} similarity matrix over {} terms",
            size,
            size,
            vocabulary.len()
        );

        Ok(Self {
            size,
            vocabulary_len: vocabulary.len(),
            values,
        })
    }

    /// Number of documents (rows and columns)
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of distinct terms across all documents
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary_len
    }

    /// Similarity between documents `i` and `j`, `None` when out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.size && j < self.size {
            Some(self.values[i * self.size + j])
        } else {
            None
        }
    }

    /// Similarities of document `i` against every document
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i < self.size {
            Some(&self.values[i * self.size..(i + 1) * self.size])
        } else {
            None
        }
    }
}

fn vectorize(terms: &[String], vocabulary: &HashMap<&str, usize>, idf: &[f32]) -> TermVector {
    let mut counts: HashMap<usize, u32> = HashMap::new();
    for term in terms {
        if let Some(&idx) = vocabulary.get(term.as_str()) {
            *counts.entry(idx).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<(usize, f32)> = counts
        .into_iter()
        .map(|(idx, count)| (idx, count as f32 * idf[idx]))
        .collect();
    entries.sort_unstable_by_key(|&(idx, _)| idx);

    let norm = entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, weight) in &mut entries {
            *weight /= norm;
        }
    }

    TermVector { entries }
}
