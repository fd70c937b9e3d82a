//! The two error kinds a caller can actually observe.
//!
//! Logical failure (a goal simply has no more answers) is not a value in
//! this type at all — it is the absence of a stream element, not an `Err`.

use thiserror::Error;

/// An error surfaced synchronously to the consumer of a [crate::Stream].
#[derive(Debug, Error)]
pub enum EngineError {
    /// A relational predicate was called with a combination of ground/unbound
    /// arguments it cannot decide.
    #[error("instantiation error: {0}")]
    Instantiation(String),
    /// Misuse of the public API, e.g. an empty clause passed to `conda`/`condu`.
    #[error("misuse error: {0}")]
    Misuse(String),
}

impl EngineError {
    pub fn instantiation(msg: impl Into<String>) -> Self {
        EngineError::Instantiation(msg.into())
    }
    pub fn misuse(msg: impl Into<String>) -> Self {
        EngineError::Misuse(msg.into())
    }
}
