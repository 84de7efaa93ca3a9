use guesstalt_core::{Error, Result, VariantMap, Vocabulary};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load a `{"variant": "canonical", ...}` JSON map
pub fn load_variants<P: AsRef<Path>>(path: P) -> Result<VariantMap> {
    let bytes = fs::read(path)?;
    let raw: HashMap<String, String> = serde_json::from_slice(&bytes)?;
    Ok(raw.into_iter().collect())
}

/// Check a variant map against the vocabulary it will serve.
///
/// Every canonical form must be a playable word, and no variant may shadow
/// a word that is itself in the vocabulary (the shadowed word would become
/// unguessable).
pub fn validate_variants(variants: &VariantMap, vocabulary: &Vocabulary) -> Result<()> {
    for (variant, canonical) in variants.iter() {
        if !vocabulary.contains(canonical) {
            return Err(Error::UnknownWord(canonical.to_string()));
        }
        if vocabulary.contains(variant) {
            return Err(Error::DuplicateWord(variant.to_string()));
        }
    }
    Ok(())
}
