//! Error types for the dragonfly routing toolkit
//!
//! Structural contract violations (operating on an empty collection,
//! addressing an item a queue does not hold, feeding a structure a
//! malformed value) surface here as typed errors. Search-semantic
//! non-success (an unreachable goal, a blown time budget) is not an
//! error: the solver reports it through its outcome variant and callers
//! branch on that before trusting the result fields.

use thiserror::Error;

/// Errors raised by the routing kernel's data structures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Peek or extract on a priority queue holding no items
    #[error("priority queue is empty")]
    EmptyQueue,

    /// Priority change requested for an item the queue does not hold
    #[error("no such item in priority queue: {0}")]
    NoSuchItem(String),

    /// Insert of an item the queue already holds
    #[error("item already in priority queue: {0}")]
    DuplicateItem(String),

    /// Nearest-neighbor query on a spatial index holding no points
    #[error("spatial index is empty")]
    EmptyIndex,

    /// Invalid configuration or parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
