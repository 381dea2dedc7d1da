//! Prompt interpretation: turns a free-text prompt into a space-joined
//! keyword string and a structured [`FilterSet`].
//!
//! Keyword extraction runs a coarse part-of-speech pass over the
//! original-case prompt and keeps nouns, proper nouns, and adjectives
//! that are not stop words. Filter extraction scans the lowercased
//! prompt with a fixed bank of patterns. Both degrade silently on
//! malformed input; the only fatal failure is the language-model load
//! at process start.

pub mod error;
pub mod filters;
pub mod model;
pub mod tagger;

pub use error::{InterpreterError, Result};
pub use model::{init, LanguageModel};

use datafinder_common::FilterSet;

/// Interpret a prompt into (keywords, filters).
///
/// Pure function of the prompt and the process-wide language model;
/// [`init`] must have been called once at startup.
pub fn interpret(prompt: &str) -> (String, FilterSet) {
    let model = model::global();
    let keywords = tagger::extract_keywords(model, prompt);
    let filters = filters::extract_filters(prompt);
    tracing::debug!(%keywords, ?filters, "Interpreted prompt");
    (keywords, filters)
}
