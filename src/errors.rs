//! Error types
//!
//! Every fallible operation in the library returns [`SuggestError`].
//! All of them abort the current run; nothing is retried.

/// Result type with [`SuggestError`] as the default error.
pub type Result<T, E = SuggestError> = std::result::Result<T, E>;

/// Errors raised while validating input, loading the model or preparing a corpus
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// Malformed user input (letters, options)
    #[error("invalid input: {0}")]
    Validation(String),

    /// An include or exclude pattern failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// A compiled pattern gave up while matching a candidate
    #[error("pattern matching failed on '{candidate}': {source}")]
    PatternMatch {
        candidate: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// Model or dictionary data violates its shape invariants
    #[error("corrupt model data: {0}")]
    DataCorrupt(String),

    /// Corpus preparation found no letters to count
    #[error("word list contains no usable words")]
    EmptyCorpus,

    /// File access failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SuggestError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn corrupt(msg: impl Into<String>) -> Self {
        Self::DataCorrupt(msg.into())
    }
}
