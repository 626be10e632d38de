//! Screening pipeline — extracts every resume, ranks the batch, assembles the table.
//!
//! Flow: extract_candidate (per document) → ranker.rank (whole batch) →
//!       assemble_ranking → ScreeningOutcome.
//!
//! Synchronous and CPU-bound; the HTTP handler runs it on the blocking pool.

use tracing::info;

use crate::screening::assembly::assemble_ranking;
use crate::screening::extractor::extract_candidate;
use crate::screening::models::{Document, ScreeningOutcome};
use crate::screening::ranker::Ranker;

/// Ranks `documents` against `job_description`.
///
/// A document that cannot be read contributes empty text (and a warning)
/// instead of failing the batch. The caller is responsible for rejecting an
/// empty job description or an empty batch beforehand.
pub fn screen(
    ranker: &dyn Ranker,
    job_description: &str,
    documents: &[Document],
) -> ScreeningOutcome {
    let extracted: Vec<_> = documents.iter().map(extract_candidate).collect();

    let warnings: Vec<String> = extracted
        .iter()
        .filter_map(|c| c.warning.clone())
        .collect();
    let any_text_extracted = extracted.iter().any(|c| !c.text.is_empty());

    let texts: Vec<&str> = extracted.iter().map(|c| c.text.as_str()).collect();
    let scores = ranker.rank(job_description, &texts);

    let names = extracted.into_iter().map(|c| c.name).collect();
    let ranked = assemble_ranking(names, &scores);

    info!(
        "Screened {} resumes ({} warnings)",
        ranked.len(),
        warnings.len()
    );

    ScreeningOutcome {
        ranked,
        warnings,
        any_text_extracted,
    }
}
