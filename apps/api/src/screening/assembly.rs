//! Result assembly — pairs names with scores and orders the ranking table.

use crate::screening::models::ScoredCandidate;

/// Zips names with scores and sorts highest score first.
///
/// Ties: `sort_by` is a stable sort, so candidates with exactly equal scores
/// stay in upload order. Scores compare with `f64::total_cmp`.
pub fn assemble_ranking(names: Vec<String>, scores: &[f64]) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = names
        .into_iter()
        .zip(scores.iter().copied())
        .map(|(name, score)| ScoredCandidate { name, score })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
