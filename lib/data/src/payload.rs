use guesstalt_core::{Error, Result, Vector, Vocabulary};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The on-disk embedding payload produced by the offline preparation
/// pipeline: an ordered word list and a parallel list of unit-normalized
/// vectors, plus optional provenance fields.
///
/// ```json
/// {"words":["cat","dog"],"vectors":[[1.0,0.0],[0.9,0.1]],"model":"...","dimensions":2}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordPayload {
    pub words: Vec<String>,
    pub vectors: Vec<Vec<f32>>,
    /// Embedding model identifier, if the pipeline recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Declared vector dimension, checked against the data when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
}

impl WordPayload {
    /// Read and parse a payload file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Validate the payload and convert it into the engine's immutable
    /// vocabulary. Count, duplicate and per-vector dimension checks happen
    /// in [`Vocabulary::new`]; the declared `dimensions` field is verified
    /// here first so a bad export fails loudly instead of playing oddly.
    pub fn into_vocabulary(self) -> Result<Vocabulary> {
        if let (Some(declared), Some(first)) = (self.dimensions, self.vectors.first()) {
            if first.len() != declared {
                return Err(Error::DimensionMismatch {
                    expected: declared,
                    actual: first.len(),
                });
            }
        }

        let vectors = self.vectors.into_iter().map(Vector::new).collect();
        Vocabulary::new(self.words, vectors)
    }
}
