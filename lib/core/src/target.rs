use crate::error::{Error, Result};
use crate::vocabulary::Vocabulary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How the hidden target word is chosen for a session.
///
/// `Daily` is the production mode: a stable hash of the calendar date, so
/// every player sees the same word on the same day. The other modes exist
/// for replays, debugging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSelection {
    /// Deterministic pick for a date string (e.g. "2026-08-07")
    Daily(String),
    /// Deterministic pick from a fixed seed
    Seeded(u64),
    /// An explicit vocabulary word
    Word(String),
    /// An explicit vocabulary index
    Index(usize),
    /// Fresh random pick per call
    Random,
}

impl TargetSelection {
    /// Resolve to a vocabulary index. Fails with `EmptyVocabulary` when
    /// there is nothing to pick from, `UnknownWord`/`InvalidIndex` when an
    /// explicit choice does not exist.
    pub fn resolve(&self, vocabulary: &Vocabulary) -> Result<usize> {
        if vocabulary.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        let len = vocabulary.len();

        match self {
            TargetSelection::Daily(date) => Ok(date_index(date, len)),
            TargetSelection::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(*seed);
                Ok(rng.random_range(0..len))
            }
            TargetSelection::Word(word) => vocabulary
                .index_of(word)
                .ok_or_else(|| Error::UnknownWord(word.clone())),
            TargetSelection::Index(index) => {
                if *index < len {
                    Ok(*index)
                } else {
                    Err(Error::InvalidIndex { index: *index, len })
                }
            }
            TargetSelection::Random => Ok(rand::rng().random_range(0..len)),
        }
    }
}

/// Stable hash of the date string, reduced to a vocabulary index.
/// blake3 keeps this reproducible across platforms and releases.
fn date_index(date: &str, len: usize) -> usize {
    let hash = blake3::hash(date.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    (u64::from_le_bytes(bytes) % len as u64) as usize
}
