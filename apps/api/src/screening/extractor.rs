//! Text extraction — turns uploaded PDF bytes into plain text, one page at a time.
//!
//! A page that fails to yield text contributes nothing; only a document that
//! cannot be decoded at all is an error, and the batch helper downgrades even
//! that to empty text for the one file.

use lopdf::Document as PdfDocument;
use thiserror::Error;
use tracing::{info, warn};

use crate::screening::models::{Document, ExtractedCandidate};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("not a readable PDF document: {0}")]
    DocumentFormat(#[from] lopdf::Error),
}

/// Extracts the text of every page, concatenated in page order.
///
/// Returns an empty string when no page carries extractable text
/// (scanned, image-only resumes).
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pdf = PdfDocument::load_mem(bytes)?;

    let mut text = String::new();
    // get_pages is keyed by 1-based page number, so iteration is already in page order
    for page_number in pdf.get_pages().keys() {
        match pdf.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!("Page {page_number} has no extractable text: {e}"),
        }
    }

    if text.trim().is_empty() {
        return Ok(String::new());
    }
    Ok(text)
}

/// Extracts a single uploaded document, never failing.
///
/// Decoding failures and text-less documents are reported through
/// `ExtractedCandidate::warning` so the rest of the batch still ranks.
pub fn extract_candidate(document: &Document) -> ExtractedCandidate {
    info!("Processing {}...", document.name);

    let (text, warning) = match extract_text(&document.content) {
        Ok(text) if text.is_empty() => (
            text,
            Some(format!("{}: no extractable text", document.name)),
        ),
        Ok(text) => (text, None),
        Err(e) => {
            warn!("Failed to extract {}: {e}", document.name);
            (String::new(), Some(format!("{}: {e}", document.name)))
        }
    };

    ExtractedCandidate {
        name: document.name.clone(),
        text,
        warning,
    }
}
