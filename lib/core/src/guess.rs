use crate::ranking::RankingTable;
use crate::vocabulary::VariantMap;
use serde::{Deserialize, Serialize};

/// One accepted guess. Immutable once created; the session appends these
/// to its history in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// Canonical vocabulary word (after variant resolution)
    pub word: String,
    /// Cosine similarity to the target
    pub similarity: f32,
    /// 1-indexed similarity rank; 1 means the guess is the target
    pub rank: usize,
    pub is_correct: bool,
    /// 1-indexed submission number within the session
    pub sequence: usize,
}

/// Why a submission was not accepted. These are ordinary gameplay
/// outcomes, not errors; the UI renders them as feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessRejection {
    /// Nothing left after trimming whitespace
    EmptyInput,
    /// The normalized word is not in the vocabulary
    OutOfVocabulary(String),
    /// The canonical word was already guessed this session
    DuplicateGuess(String),
}

/// Result of evaluating one raw submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Accepted(GuessRecord),
    Rejected(GuessRejection),
}

impl GuessOutcome {
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, GuessOutcome::Accepted(_))
    }

    #[inline]
    pub fn record(&self) -> Option<&GuessRecord> {
        match self {
            GuessOutcome::Accepted(record) => Some(record),
            GuessOutcome::Rejected(_) => None,
        }
    }
}

/// Normalize, validate and score one submission.
///
/// Pipeline: trim + lowercase, reject empty input, resolve through the
/// variant map, reject unknown and repeated words, otherwise score from the
/// table. Pure given its inputs; appending the accepted record to the
/// history is the caller's job.
pub fn evaluate(
    raw: &str,
    table: &RankingTable,
    variants: Option<&VariantMap>,
    history: &[GuessRecord],
) -> GuessOutcome {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return GuessOutcome::Rejected(GuessRejection::EmptyInput);
    }

    let canonical = match variants {
        Some(map) => map.resolve(&normalized).to_string(),
        None => normalized,
    };

    let entry = match table.lookup(&canonical) {
        Some(entry) => entry,
        None => return GuessOutcome::Rejected(GuessRejection::OutOfVocabulary(canonical)),
    };

    if history.iter().any(|g| g.word == canonical) {
        return GuessOutcome::Rejected(GuessRejection::DuplicateGuess(canonical));
    }

    GuessOutcome::Accepted(GuessRecord {
        is_correct: canonical == table.target_word(),
        word: canonical,
        similarity: entry.similarity,
        rank: entry.rank,
        sequence: history.len() + 1,
    })
}
