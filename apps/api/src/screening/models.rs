use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An uploaded resume: raw PDF bytes plus the name it is displayed under.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub content: Bytes,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// One row of the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub name: String,
    /// Percentage in [0, 100], full precision.
    pub score: f64,
}

/// Text pulled out of a single document, still paired with its display name.
#[derive(Debug, Clone)]
pub struct ExtractedCandidate {
    pub name: String,
    pub text: String,
    /// Set when the document could not be decoded or yielded no text.
    pub warning: Option<String>,
}

/// Outcome of screening a batch of resumes against one job description.
#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    /// Highest score first; ties keep upload order.
    pub ranked: Vec<ScoredCandidate>,
    pub warnings: Vec<String>,
    /// False when not a single resume produced any text.
    pub any_text_extracted: bool,
}
