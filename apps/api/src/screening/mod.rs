// Resume screening: PDF text extraction, batch TF-IDF ranking, result assembly.
// Everything below handlers is synchronous and free of I/O beyond reading upload bytes.

pub mod assembly;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod ranker;
pub mod screener;
pub mod tfidf;
pub mod tokenizer;
