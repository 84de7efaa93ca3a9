//! # Guesstalt
//!
//! A daily word-guessing game engine built on word embeddings.
//!
//! Each day has a hidden target word. Players submit guesses and learn how
//! semantically close each one is: the engine ranks the entire vocabulary
//! by cosine similarity to the target, projects guesses into a 3D semantic
//! map via power-iteration PCA over difference vectors, and surfaces "hot
//! pairs" — guess pairs whose midpoint is closer to the target than either
//! guess alone.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install guesstalt
//! guesstalt --data data/words.json
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use guesstalt::prelude::*;
//! use std::sync::Arc;
//!
//! let payload = WordPayload::load("data/words.json").unwrap();
//! let vocabulary = Arc::new(payload.into_vocabulary().unwrap());
//!
//! let mut session = Session::new(
//!     vocabulary,
//!     None,
//!     &TargetSelection::Daily("2026-08-07".to_string()),
//! ).unwrap();
//!
//! match session.submit("ocean") {
//!     GuessOutcome::Accepted(record) => {
//!         println!("rank {} of {}", record.rank, session.vocabulary().len());
//!     }
//!     GuessOutcome::Rejected(rejection) => println!("{rejection:?}"),
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - [`guesstalt-core`](https://docs.rs/guesstalt-core) - ranking, guess
//!   evaluation, projection, radius mapping, pair hints, sessions
//! - [`guesstalt-data`](https://docs.rs/guesstalt-data) - payload and
//!   variant-map loading

// Re-export core types
pub use guesstalt_core::{
    evaluate, find_hot_pairs, plot_points, Error, GuessOutcome, GuessRecord, GuessRejection,
    HotPair, PlotPoint, ProjectionBasis, ProjectionConfig, RadiusScale, RankEntry, RankingBuild,
    RankingTable, Result, Session, TargetSelection, VariantMap, Vector, Vocabulary,
    DEFAULT_IMPROVEMENT_THRESHOLD, DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS,
    DEFAULT_POWER_ITERATIONS,
};

// Re-export data loading
pub use guesstalt_data::{load_variants, validate_variants, WordPayload};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GuessOutcome, GuessRecord, GuessRejection, HotPair, PlotPoint, ProjectionBasis,
        ProjectionConfig, RadiusScale, RankingBuild, RankingTable, Session, TargetSelection,
        VariantMap, Vector, Vocabulary, WordPayload,
    };
}
