use crate::error::{Error, Result};
use crate::vector::Vector;
use crate::vocabulary::Vocabulary;
use ahash::AHashMap;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Similarity and rank of one vocabulary word against the session target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    /// Cosine similarity to the target, in [-1, 1]
    pub similarity: f32,
    /// 1-indexed position in the similarity ordering; rank 1 is the target
    pub rank: usize,
}

/// Word -> similarity/rank table for one target.
///
/// Building costs O(N·D) similarity work plus an O(N log N) sort, so it is
/// done once per target selection; lookups are O(1). The table is read-only
/// once built and is rebuilt from scratch when the target changes.
#[derive(Debug, Clone)]
pub struct RankingTable {
    entries: AHashMap<String, RankEntry>,
    target_word: String,
    target_index: usize,
}

impl RankingTable {
    /// Rank the whole vocabulary against the word at `target_index`.
    pub fn build(vocabulary: &Vocabulary, target_index: usize) -> Result<Self> {
        let target = check_target(vocabulary, target_index)?;

        let similarities = vocabulary
            .vectors()
            .par_iter()
            .map(|vector| target.cosine_similarity(vector))
            .collect::<Result<Vec<f32>>>()?;

        Ok(assemble(vocabulary, target_index, similarities))
    }

    #[inline]
    pub fn lookup(&self, word: &str) -> Option<RankEntry> {
        self.entries.get(word).copied()
    }

    #[inline]
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.lookup(word).map(|e| e.rank)
    }

    #[inline]
    pub fn similarity(&self, word: &str) -> Option<f32> {
        self.lookup(word).map(|e| e.similarity)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    #[inline]
    #[must_use]
    pub fn target_index(&self) -> usize {
        self.target_index
    }
}

/// Validate the build preconditions and return the target vector.
pub(crate) fn check_target(vocabulary: &Vocabulary, target_index: usize) -> Result<&Vector> {
    if vocabulary.is_empty() {
        return Err(Error::EmptyVocabulary);
    }
    vocabulary.vector(target_index).ok_or(Error::InvalidIndex {
        index: target_index,
        len: vocabulary.len(),
    })
}

/// Turn per-word similarities into the final table. Shared by the
/// foreground and background build paths so both produce identical ranks.
///
/// Sort order: similarity descending, ties broken by word ascending. The
/// tie-break makes ranks a pure function of the data rather than of
/// vocabulary file order.
pub(crate) fn assemble(
    vocabulary: &Vocabulary,
    target_index: usize,
    similarities: Vec<f32>,
) -> RankingTable {
    let words = vocabulary.words();

    let mut order: Vec<usize> = (0..similarities.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        OrderedFloat(similarities[b])
            .cmp(&OrderedFloat(similarities[a]))
            .then_with(|| words[a].cmp(&words[b]))
    });

    let mut entries = AHashMap::with_capacity(order.len());
    for (position, &i) in order.iter().enumerate() {
        entries.insert(
            words[i].clone(),
            RankEntry {
                similarity: similarities[i],
                rank: position + 1,
            },
        );
    }

    RankingTable {
        entries,
        target_word: words[target_index].clone(),
        target_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(entries: &[(&str, &[f32])]) -> Vocabulary {
        Vocabulary::new(
            entries.iter().map(|(w, _)| w.to_string()).collect(),
            entries.iter().map(|(_, v)| Vector::from_slice(v)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_target_has_rank_one() {
        let v = vocab(&[
            ("cat", &[1.0, 0.0]),
            ("dog", &[0.9, 0.1]),
            ("car", &[0.0, 1.0]),
        ]);
        let table = RankingTable::build(&v, 0).unwrap();

        let cat = table.lookup("cat").unwrap();
        assert_eq!(cat.rank, 1);
        assert!((cat.similarity - 1.0).abs() < 1e-6);
        assert_eq!(table.target_word(), "cat");
    }

    #[test]
    fn test_ranks_are_a_permutation() {
        let v = vocab(&[
            ("a", &[1.0, 0.0]),
            ("b", &[0.5, 0.5]),
            ("c", &[0.0, 1.0]),
            ("d", &[-1.0, 0.0]),
        ]);
        let table = RankingTable::build(&v, 0).unwrap();

        let mut ranks: Vec<usize> = v
            .words()
            .iter()
            .map(|w| table.rank(w).unwrap())
            .collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_similarity_and_rank_are_monotone() {
        let v = vocab(&[
            ("cat", &[1.0, 0.0]),
            ("dog", &[0.9, 0.1]),
            ("car", &[0.0, 1.0]),
        ]);
        let table = RankingTable::build(&v, 0).unwrap();

        let dog = table.lookup("dog").unwrap();
        let car = table.lookup("car").unwrap();
        assert!(dog.similarity > car.similarity);
        assert!(dog.rank < car.rank);
    }

    #[test]
    fn test_exact_ties_break_by_word_order() {
        // "bat" and "rat" share a vector, so their similarities are equal
        // bit-for-bit; "bat" must sort first regardless of list order.
        let v = vocab(&[
            ("cat", &[1.0, 0.0]),
            ("rat", &[0.5, 0.5]),
            ("bat", &[0.5, 0.5]),
        ]);
        let table = RankingTable::build(&v, 0).unwrap();
        let bat = table.rank("bat").unwrap();
        let rat = table.rank("rat").unwrap();
        assert_eq!(bat + 1, rat);
    }

    #[test]
    fn test_invalid_index() {
        let v = vocab(&[("cat", &[1.0])]);
        assert!(matches!(
            RankingTable::build(&v, 5),
            Err(Error::InvalidIndex { index: 5, len: 1 })
        ));
    }

    #[test]
    fn test_empty_vocabulary() {
        let v = Vocabulary::new(vec![], vec![]).unwrap();
        assert!(matches!(
            RankingTable::build(&v, 0),
            Err(Error::EmptyVocabulary)
        ));
    }
}
