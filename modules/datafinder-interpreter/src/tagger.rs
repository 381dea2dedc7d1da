//! Tokenizer and coarse POS tagger over the original-case prompt.

use crate::model::{LanguageModel, PosTag};

/// Split a prompt into alphanumeric word tokens, preserving order.
/// Punctuation separates tokens and is discarded.
pub fn tokenize(prompt: &str) -> Vec<&str> {
    prompt
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Tag a single token. Lookup order: lexicon on the lowercased form,
/// numbers, capitalization, suffix heuristics, open-class default (noun).
pub fn tag_token(model: &LanguageModel, token: &str) -> PosTag {
    let lower = token.to_lowercase();

    if let Some(tag) = model.lookup(&lower) {
        return tag;
    }

    if token.chars().all(|c| c.is_ascii_digit()) {
        return PosTag::Number;
    }

    if token.chars().next().is_some_and(|c| c.is_uppercase()) {
        return PosTag::ProperNoun;
    }

    suffix_tag(&lower).unwrap_or(PosTag::Noun)
}

/// Minimal suffix table for open-class words missing from the lexicon.
/// Length floors keep short false positives ("speed", "only") out.
fn suffix_tag(lower: &str) -> Option<PosTag> {
    if lower.len() >= 5 && lower.ends_with("ly") {
        return Some(PosTag::Adverb);
    }
    if lower.len() >= 6 && lower.ends_with("ed") {
        return Some(PosTag::Verb);
    }
    for adj_suffix in ["ous", "ful", "ive", "able", "ible", "ish"] {
        if lower.len() >= adj_suffix.len() + 3 && lower.ends_with(adj_suffix) {
            return Some(PosTag::Adjective);
        }
    }
    None
}

/// Keep nouns, proper nouns, and adjectives that are not stop words,
/// in input order and original case; join with single spaces.
pub fn extract_keywords(model: &LanguageModel, prompt: &str) -> String {
    tokenize(prompt)
        .into_iter()
        .filter(|token| {
            let lower = token.to_lowercase();
            tag_token(model, token).is_keyword_class() && !model.is_stop_word(&lower)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
