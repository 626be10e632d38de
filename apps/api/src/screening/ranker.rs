//! Ranker — scores candidate texts against a reference text.
//!
//! Default: `TfIdfRanker` (batch TF-IDF + cosine, pure and deterministic).
//!
//! `AppState` holds an `Arc<dyn Ranker>` so another backend can be swapped in
//! without touching the handler.

use tracing::debug;

use crate::screening::tfidf::{cosine_similarity, fit_transform};

/// Scores each candidate against the reference.
///
/// Output is length-preserving: `scores[i]` belongs to `candidates[i]`, each a
/// percentage in [0, 100].
pub trait Ranker: Send + Sync {
    fn rank(&self, reference: &str, candidates: &[&str]) -> Vec<f64>;
}

/// TF-IDF cosine similarity. The vocabulary is rebuilt on every call from the
/// reference plus candidates, so IDF reflects exactly that batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfRanker;

impl Ranker for TfIdfRanker {
    fn rank(&self, reference: &str, candidates: &[&str]) -> Vec<f64> {
        rank(reference, candidates)
    }
}

/// Similarity of each candidate to `reference` as a percentage.
///
/// An empty batch vocabulary yields all zeros.
pub fn rank(reference: &str, candidates: &[&str]) -> Vec<f64> {
    let documents: Vec<&str> = std::iter::once(reference)
        .chain(candidates.iter().copied())
        .collect();

    let matrix = fit_transform(&documents);
    if matrix.is_empty_vocabulary() {
        debug!("Empty vocabulary across {} documents", documents.len());
        return vec![0.0; candidates.len()];
    }
    debug!(
        "Vectorized {} documents over {} terms",
        documents.len(),
        matrix.vocabulary.len()
    );

    let Some((reference_vector, candidate_vectors)) = matrix.rows.split_first() else {
        return vec![0.0; candidates.len()];
    };

    candidate_vectors
        .iter()
        .map(|candidate| cosine_similarity(reference_vector, candidate) * 100.0)
        .collect()
}
