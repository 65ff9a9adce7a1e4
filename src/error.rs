//! Error types for split prediction.
//!
//! Every variant is a data-integrity failure: the event stream fed to a
//! tree was malformed or replayed out of order. None are recoverable in
//! place, so operations return them immediately and leave retry policy
//! to the caller.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PredictError {
    /// too many or too few creatures for the operation
    #[error("height error: {0}")]
    Height(String),

    /// new information contradicts what is already certain
    #[error("certainty error: {0}")]
    Certainty(String),

    /// a placeholder guess had to be discarded but none was left
    #[error("no uncertain creature left to discard in {0}")]
    NoUncertainCreature(String),

    /// split size or initial-split legality violated
    #[error("illegal split: {0}")]
    IllegalSplit(String),

    #[error("two leaves marked {marker} created on turn {turn}")]
    DuplicateLeaf { marker: String, turn: u32 },

    #[error("lookup failed: {0}")]
    Lookup(String),

    #[error("cannot merge {this} with {that}: {reason}")]
    Merge {
        this: String,
        that: String,
        reason: String,
    },

    #[error("unknown creature type '{0}'")]
    UnknownCreature(String),
}

/// Convenience type alias for Results using the crate's error type
pub type Result<T> = std::result::Result<T, PredictError>;
