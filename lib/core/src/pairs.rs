use crate::error::{Error, Result};
use crate::guess::GuessRecord;
use crate::vector::Vector;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A pair must beat its better member by at least this much to be reported;
/// smaller improvements are visually meaningless. Callers may override.
pub const DEFAULT_IMPROVEMENT_THRESHOLD: f32 = 0.01;

/// Two guesses whose vector midpoint is closer to the target than either
/// guess alone, hinting the target is conceptually between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotPair {
    pub word_a: String,
    pub word_b: String,
    /// Cosine similarity of the pair midpoint to the target
    pub midpoint_similarity: f32,
    /// `midpoint_similarity - max(similarity_a, similarity_b)`
    pub improvement: f32,
}

/// Find every unordered pair of guesses whose midpoint beats both members
/// by more than `threshold`, most improved first.
///
/// `records` and `vectors` are parallel slices. O(G²·D) over the guess
/// count, which stays small in human play; callers cap the display count.
pub fn find_hot_pairs(
    records: &[GuessRecord],
    vectors: &[Vector],
    target: &Vector,
    threshold: f32,
) -> Result<Vec<HotPair>> {
    if records.len() != vectors.len() {
        return Err(Error::InvalidDomain(format!(
            "{} guess records but {} vectors",
            records.len(),
            vectors.len()
        )));
    }

    let mut pairs = Vec::new();
    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let midpoint = vectors[i].midpoint(&vectors[j])?;
            let midpoint_similarity = midpoint.cosine_similarity(target)?;
            let best = records[i].similarity.max(records[j].similarity);

            if midpoint_similarity > best + threshold {
                pairs.push(HotPair {
                    word_a: records[i].word.clone(),
                    word_b: records[j].word.clone(),
                    midpoint_similarity,
                    improvement: midpoint_similarity - best,
                });
            }
        }
    }

    pairs.sort_unstable_by(|a, b| {
        OrderedFloat(b.improvement)
            .cmp(&OrderedFloat(a.improvement))
            .then_with(|| {
                (a.word_a.as_str(), a.word_b.as_str()).cmp(&(b.word_a.as_str(), b.word_b.as_str()))
            })
    });
    Ok(pairs)
}
