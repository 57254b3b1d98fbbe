//! Language model
//!
//! The transition table and dictionary, and how they are stored on disk.

pub mod store;
mod transition;

pub use transition::{PROBABILITY_TOLERANCE, RawTable, TransitionModel};
pub(crate) use transition::TableRecord;
