//! # Guesstalt Core
//!
//! Core engine for the Guesstalt word-guessing game.
//!
//! A player submits words and learns how semantically close each one is to
//! a hidden daily target, measured over precomputed word embeddings. This
//! crate provides the numerical heart of that loop:
//!
//! - [`Vector`] - dense embedding vector with cosine/difference/midpoint ops
//! - [`Vocabulary`] - immutable word list paired with vectors
//! - [`RankingTable`] - full-vocabulary similarity ranking for one target
//! - [`RankingBuild`] - the same build, cancellable on a worker thread
//! - [`GuessOutcome`] - normalization, validation and scoring of a guess
//! - [`ProjectionBasis`] - power-iteration PCA over difference vectors
//! - [`RadiusScale`] - log-scale rank-to-radius mapping for rendering
//! - [`HotPair`] - guess pairs whose midpoint beats both members
//! - [`Session`] - explicit per-play state tying it all together
//!
//! ## Example
//!
//! ```rust
//! use guesstalt_core::{Session, TargetSelection, Vector, Vocabulary};
//! use std::sync::Arc;
//!
//! let vocabulary = Arc::new(Vocabulary::new(
//!     vec!["cat".to_string(), "dog".to_string(), "car".to_string()],
//!     vec![
//!         Vector::new(vec![1.0, 0.0]),
//!         Vector::new(vec![0.9, 0.1]),
//!         Vector::new(vec![0.0, 1.0]),
//!     ],
//! ).unwrap());
//!
//! let mut session = Session::new(
//!     vocabulary,
//!     None,
//!     &TargetSelection::Word("cat".to_string()),
//! ).unwrap();
//!
//! let outcome = session.submit("dog");
//! let record = outcome.record().unwrap();
//! assert_eq!(record.rank, 2);
//! ```

pub mod background;
pub mod error;
pub mod guess;
pub mod pairs;
pub mod plot;
pub mod projection;
pub mod radius;
pub mod ranking;
pub mod session;
pub mod target;
pub mod vector;
pub mod vocabulary;

pub use background::RankingBuild;
pub use error::{Error, Result};
pub use guess::{evaluate, GuessOutcome, GuessRecord, GuessRejection};
pub use pairs::{find_hot_pairs, HotPair, DEFAULT_IMPROVEMENT_THRESHOLD};
pub use plot::{plot_points, PlotPoint};
pub use projection::{ProjectionBasis, ProjectionConfig, DEFAULT_POWER_ITERATIONS};
pub use radius::{RadiusScale, DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS};
pub use ranking::{RankEntry, RankingTable};
pub use session::Session;
pub use target::TargetSelection;
pub use vector::Vector;
pub use vocabulary::{VariantMap, Vocabulary};
