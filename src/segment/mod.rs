//! Ground-truth segmentation.
//!
//! The corpus is split into sentence units once at engine load; the dense
//! strategy embeds and indexes the units, the classifier strategy ignores
//! them and scores against the raw text.

#[cfg(test)]
mod tests;

use tracing::debug;

/// Sentence terminator used to split the ground truth.
pub const SENTENCE_TERMINATOR: char = '.';

/// A trimmed, non-empty sentence of the ground truth.
///
/// `ordinal` is the unit's position in the emitted sequence and doubles as
/// the tie-break key for equal similarity scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceUnit {
    pub text: String,
    pub ordinal: usize,
}

impl SentenceUnit {
    pub fn new<S: Into<String>>(text: S, ordinal: usize) -> Self {
        Self {
            text: text.into(),
            ordinal,
        }
    }
}

impl std::fmt::Display for SentenceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Splits `text` into ordered sentence units.
///
/// Candidates are split on [`SENTENCE_TERMINATOR`], trimmed, and dropped when
/// empty. Text without a terminator yields a single unit (the trimmed whole);
/// empty or whitespace-only text yields no units. Deterministic and
/// idempotent.
pub fn segment(text: &str) -> Vec<SentenceUnit> {
    let units: Vec<SentenceUnit> = text
        .split(SENTENCE_TERMINATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(ordinal, s)| SentenceUnit::new(s, ordinal))
        .collect();

    debug!(
        input_len = text.len(),
        units = units.len(),
        "Segmented ground truth"
    );

    units
}
