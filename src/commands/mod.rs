//! Command implementations

pub mod prepare;
pub mod suggest;

pub use prepare::{PrepareConfig, PrepareResult, run_prepare};
pub use suggest::{SuggestConfig, SuggestResult, suggest_words};
