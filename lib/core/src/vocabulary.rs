use crate::error::{Error, Result};
use crate::vector::Vector;
use ahash::AHashMap;

/// An ordered word list paired 1:1 with fixed-dimension embedding vectors.
///
/// Validated on construction (no duplicate words, uniform dimension) and
/// immutable afterwards; every session shares one vocabulary for its whole
/// lifetime.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
    vectors: Vec<Vector>,
    index: AHashMap<String, usize>,
    dim: usize,
}

impl Vocabulary {
    pub fn new(words: Vec<String>, vectors: Vec<Vector>) -> Result<Self> {
        if words.len() != vectors.len() {
            return Err(Error::CountMismatch {
                words: words.len(),
                vectors: vectors.len(),
            });
        }

        let dim = vectors.first().map(Vector::dim).unwrap_or(0);
        for vector in &vectors {
            if vector.dim() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    actual: vector.dim(),
                });
            }
        }

        let mut index = AHashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.clone(), i).is_some() {
                return Err(Error::DuplicateWord(word.clone()));
            }
        }

        Ok(Self {
            words,
            vectors,
            index,
            dim,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Embedding dimension; 0 for an empty vocabulary
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    #[inline]
    pub fn vector(&self, index: usize) -> Option<&Vector> {
        self.vectors.get(index)
    }

    #[inline]
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    #[inline]
    pub fn vector_of(&self, word: &str) -> Option<&Vector> {
        self.index_of(word).and_then(|i| self.vectors.get(i))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }
}

/// Maps alternate word forms (plurals, inflections) to the canonical
/// vocabulary word they score as. Consulted once per guess, never mutated
/// at runtime.
#[derive(Debug, Clone, Default)]
pub struct VariantMap {
    map: AHashMap<String, String>,
}

impl VariantMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, variant: impl Into<String>, canonical: impl Into<String>) {
        self.map.insert(variant.into(), canonical.into());
    }

    /// Canonical form of `word`, or `word` itself when no mapping exists
    #[inline]
    pub fn resolve<'a>(&'a self, word: &'a str) -> &'a str {
        self.map.get(word).map(String::as_str).unwrap_or(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for VariantMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
