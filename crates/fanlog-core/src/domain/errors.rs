//! Errors - error taxonomy of the core.
//!
//! - `ShapeError`: a message was built with the wrong shape (runtime constructors only)
//! - `SinkError`: one sink failed to write its output
//! - `DispatchError`: every sink was attempted and at least one failed
//! - `BuildError`: a component was wired inconsistently

use thiserror::Error;

/// A message did not match the shape its constructor requires.
///
/// The static constructors make these cases unrepresentable; this type is
/// only returned by the slice/`Vec` based constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("payload of {found} values exceeds capacity {capacity}")]
    PayloadOverflow { capacity: usize, found: usize },

    #[error("template expects {expected} arguments, got {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("malformed template {template:?}: stray brace at byte {offset}")]
    MalformedTemplate {
        template: &'static str,
        offset: usize,
    },
}

/// Failure of one sink's output operation.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("record encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A sink failure together with where it happened in the dispatch.
#[derive(Debug, Error)]
#[error("sink #{position} ({kind}) failed: {source}")]
pub struct SinkFailure {
    /// Registration index of the sink.
    pub position: usize,
    pub kind: &'static str,
    pub source: SinkError,
}

/// Dispatch is best-effort: every sink is attempted, failures are collected.
#[derive(Debug, Error)]
#[error("{} of {attempted} sinks failed", .failures.len())]
pub struct DispatchError {
    pub attempted: usize,
    pub failures: Vec<SinkFailure>,
}

/// BuildError is returned by `ComponentBuilder::build`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("component has no sinks")]
    NoSinks,

    #[error("no sink registered for expected kinds {0:?}")]
    MissingSinkKinds(Vec<String>),
}
