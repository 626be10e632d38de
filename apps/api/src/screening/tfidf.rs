//! TF-IDF vectorization over a single batch of documents, plus cosine similarity.
//!
//! Weighting:
//! - tf  = raw term count in the document
//! - idf = ln((1 + n) / (1 + df)) + 1   (smoothed, n = documents in the batch)
//! - each document vector is L2-normalised
//!
//! The vocabulary only ever covers the documents passed to [`fit_transform`];
//! scores from two different batches are not comparable.

use std::collections::BTreeMap;

use crate::screening::tokenizer::tokenize;

/// Sparse document vector: `(term_index, weight)` sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Merge-join dot product; both sides are sorted by term index.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ti, wi) = self.entries[i];
            let (tj, wj) = other.entries[j];
            match ti.cmp(&tj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// TF-IDF vectors for one batch, row `i` belonging to input document `i`.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    pub vocabulary: BTreeMap<String, usize>,
    pub rows: Vec<SparseVector>,
}

impl TfIdfMatrix {
    pub fn is_empty_vocabulary(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

/// Builds the batch vocabulary and the normalised TF-IDF vector of every document.
pub fn fit_transform(documents: &[&str]) -> TfIdfMatrix {
    let term_counts: Vec<BTreeMap<String, u32>> = documents
        .iter()
        .map(|doc| {
            let mut counts = BTreeMap::new();
            for term in tokenize(doc) {
                *counts.entry(term).or_insert(0) += 1;
            }
            counts
        })
        .collect();

    // Indices follow lexical term order, so each document's BTreeMap walk
    // produces entries already sorted by index.
    let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
    for counts in &term_counts {
        for term in counts.keys() {
            vocabulary.entry(term.clone()).or_insert(0);
        }
    }
    for (index, slot) in vocabulary.values_mut().enumerate() {
        *slot = index;
    }

    let mut document_frequency = vec![0u32; vocabulary.len()];
    for counts in &term_counts {
        for term in counts.keys() {
            document_frequency[vocabulary[term]] += 1;
        }
    }

    let n = documents.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let rows = term_counts
        .iter()
        .map(|counts| {
            let entries: Vec<(usize, f64)> = counts
                .iter()
                .map(|(term, &tf)| {
                    let index = vocabulary[term];
                    (index, tf as f64 * idf[index])
                })
                .collect();
            normalise(SparseVector { entries })
        })
        .collect();

    TfIdfMatrix { vocabulary, rows }
}

fn normalise(mut vector: SparseVector) -> SparseVector {
    let norm = vector.norm();
    if norm > 0.0 {
        for (_, w) in &mut vector.entries {
            *w /= norm;
        }
    }
    vector
}

/// Cosine similarity in [0, 1]. Zero vectors compare as 0, never NaN.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    // TF-IDF weights are non-negative; clamp only absorbs rounding past 1.0
    (a.dot(b) / denominator).clamp(0.0, 1.0)
}
