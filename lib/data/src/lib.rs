//! # Guesstalt Data
//!
//! Loading and validation for Guesstalt's input payloads.
//!
//! The engine treats its data source as an opaque contract: an ordered word
//! list with a parallel list of fixed-dimension embedding vectors, prepared
//! offline. This crate turns that contract's JSON form into the engine's
//! validated [`Vocabulary`](guesstalt_core::Vocabulary), and loads the
//! optional variant map used during guess normalization.

pub mod payload;
pub mod variants;

pub use payload::WordPayload;
pub use variants::{load_variants, validate_variants};
