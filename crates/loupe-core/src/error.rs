//! Error types for typed access, coercion, and indexing failures.
//!
//! The taxonomy is closed: five kinds, raised synchronously at the failing
//! call, with no recovery attempted inside the crate. Every variant carries
//! the full [`KeyPath`] of the access that failed — that path is the primary
//! diagnostic value of the whole design, since a failure deep in a nested
//! document is unlocatable without it. The `find_*` getter family is the
//! sanctioned way to avoid errors entirely; those methods only ever return
//! an absent marker.

use crate::path::KeyPath;
use crate::value::{Key, Value};
use thiserror::Error;

/// Errors raised by typed getters, coercions, indexing, and write attempts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    /// A strict getter found a value of a different runtime type.
    #[error("expected {expected} at {path}, found {} {found}", .found.kind())]
    UnexpectedType {
        /// The requested type's name, e.g. `"int"`.
        expected: &'static str,
        /// The offending raw value.
        found: Value,
        path: KeyPath,
    },

    /// A coercive getter (or strict list getter) found no applicable
    /// conversion or shape match.
    #[error("cannot cast {} {value} at {path} to {target}", .value.kind())]
    UncastableValue {
        /// The requested target, e.g. `"bool"` or `"list_of_int"`.
        target: &'static str,
        /// The offending raw value.
        value: Value,
        path: KeyPath,
    },

    /// Indexing was attempted with a dynamic key that is neither a string
    /// nor an integer.
    #[error("cannot index {path} with {} key {key}", .key.kind())]
    UnexpectedKeyType {
        /// The offending key value.
        key: Value,
        path: KeyPath,
    },

    /// The key path does not resolve to any value.
    #[error("missing value at {path}")]
    MissingValue { path: KeyPath },

    /// A write was attempted through the read-only accessor.
    #[error("cannot modify read-only value at {path}")]
    CannotModify { path: KeyPath },
}

impl AccessError {
    /// The full path of the access that failed, from the root.
    pub fn path(&self) -> &KeyPath {
        match self {
            AccessError::UnexpectedType { path, .. }
            | AccessError::UncastableValue { path, .. }
            | AccessError::UnexpectedKeyType { path, .. }
            | AccessError::MissingValue { path }
            | AccessError::CannotModify { path } => path,
        }
    }

    /// The keys of the failing access in order, for callers that format
    /// their own diagnostics.
    pub fn key_sequence(&self) -> &[Key] {
        self.path().keys()
    }
}

/// Convenience alias used throughout loupe-core.
pub type Result<T> = std::result::Result<T, AccessError>;
