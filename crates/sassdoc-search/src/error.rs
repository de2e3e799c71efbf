//! Error types for index construction, loading and querying.

use thiserror::Error;

use crate::id::DocId;

/// Errors raised while building, loading or decoding a search index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Two entries produced the same composite identifier.
    #[error("duplicate documentation id `{id}`")]
    DuplicateId {
        /// The colliding identifier.
        id: DocId,
    },

    /// An entry name cannot be used as part of an in-page anchor.
    #[error("invalid entry name {name:?}: {reason}")]
    InvalidName {
        /// The offending name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An identifier does not have the `type-name` shape.
    #[error("malformed documentation id {0:?}")]
    MalformedId(String),

    /// An entry type label is not one of the known categories.
    #[error("unknown documentation type {0:?}")]
    UnknownType(String),

    /// The serialized index was written by an incompatible version.
    #[error("unsupported index version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the blob.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },

    /// The serialized index is internally inconsistent.
    #[error("corrupt index: {0}")]
    Corrupt(String),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors raised while parsing query syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParseError {
    /// A `field:` prefix names a field that is not indexed.
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// A modifier (`~`, `^`) is not followed by a number.
    #[error("expected a number after `{modifier}` in {clause:?}")]
    MissingNumber {
        /// The modifier character.
        modifier: char,
        /// The clause being parsed.
        clause: String,
    },

    /// A clause has modifiers or a field prefix but no term.
    #[error("empty term in clause {0:?}")]
    EmptyTerm(String),
}
