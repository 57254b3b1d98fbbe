//! Word Game Suggester
//!
//! Ranks every arrangement of a letter pool by how word-like it looks under a
//! multi-order Markov chain letter model.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordgame_suggester::core::LetterPool;
//! use wordgame_suggester::model::store::load_model;
//! use wordgame_suggester::pipeline::{PatternFilter, Suggester};
//!
//! let model = load_model("data").unwrap();
//! let suggester = Suggester::new(&model);
//!
//! let pool = LetterPool::new("tesa").unwrap();
//! let filter = PatternFilter::new("T.*", "").unwrap();
//! let suggestions = suggester.suggest(&pool, &filter, true).unwrap();
//!
//! for (len, words) in &suggestions.groups {
//!     println!("{len}: {:?}", words.first().map(|w| &w.word));
//! }
//! ```

// Core domain types
pub mod core;

// Error types
pub mod errors;

// Transition model and persistence
pub mod model;

// Generation, filtering, scoring, ranking, tiers
pub mod pipeline;

// Offline model preparation
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

#[cfg(test)]
pub(crate) mod test_utils;
