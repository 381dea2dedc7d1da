//! The process-wide language model: a compact POS lexicon embedded in the
//! crate plus the English stop-word list. Loaded once behind a `OnceLock`;
//! load failure is fatal at startup and never recoverable per call.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{InterpreterError, Result};

/// Coarse part-of-speech classes. Only nouns, proper nouns, and
/// adjectives survive keyword extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Adverb,
    Number,
    Other,
}

impl PosTag {
    pub fn is_keyword_class(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Adjective)
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "noun" => Some(PosTag::Noun),
            "propn" => Some(PosTag::ProperNoun),
            "adj" => Some(PosTag::Adjective),
            "verb" => Some(PosTag::Verb),
            "adv" => Some(PosTag::Adverb),
            "num" => Some(PosTag::Number),
            "other" => Some(PosTag::Other),
            _ => None,
        }
    }
}

/// On-disk shape of the embedded lexicon asset.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    words: HashMap<String, String>,
}

pub struct LanguageModel {
    lexicon: HashMap<String, PosTag>,
    stop_words: HashSet<String>,
}

const LEXICON_JSON: &str = include_str!("../assets/lexicon.json");

impl LanguageModel {
    fn load() -> Result<Self> {
        let parsed: LexiconFile = serde_json::from_str(LEXICON_JSON)
            .map_err(|e| InterpreterError::ModelLoad(format!("lexicon parse error: {e}")))?;

        let mut lexicon = HashMap::with_capacity(parsed.words.len());
        for (word, label) in parsed.words {
            let tag = PosTag::from_label(&label).ok_or_else(|| {
                InterpreterError::ModelLoad(format!("unknown tag {label:?} for word {word:?}"))
            })?;
            lexicon.insert(word, tag);
        }

        let stop_words: HashSet<String> = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();

        tracing::info!(
            lexicon_words = lexicon.len(),
            stop_words = stop_words.len(),
            "Language model loaded"
        );

        Ok(Self {
            lexicon,
            stop_words,
        })
    }

    /// Lexicon lookup. Expects the lowercased token.
    pub fn lookup(&self, lower: &str) -> Option<PosTag> {
        self.lexicon.get(lower).copied()
    }

    /// Stop-word check. Expects the lowercased token.
    pub fn is_stop_word(&self, lower: &str) -> bool {
        self.stop_words.contains(lower)
    }
}

static MODEL: OnceLock<LanguageModel> = OnceLock::new();

/// Initialize the process-wide model. Idempotent: subsequent calls return
/// the already-loaded instance.
pub fn init() -> Result<&'static LanguageModel> {
    if let Some(model) = MODEL.get() {
        return Ok(model);
    }
    let model = LanguageModel::load()?;
    Ok(MODEL.get_or_init(|| model))
}

/// The loaded model. Panics if [`init`] was not called at startup.
pub(crate) fn global() -> &'static LanguageModel {
    MODEL
        .get()
        .expect("language model not initialized; call datafinder_interpreter::init() at startup")
}
