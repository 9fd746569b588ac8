//! Key paths: where in the decoded tree an accessor points.
//!
//! A `KeyPath` records the exact sequence of keys indexed to reach the
//! current position, starting from the empty path at the root. Paths are
//! append-only along a descent chain: every step produces a new path, the
//! parent's is never touched, so parent and child accessors can keep using
//! their own paths independently.

use crate::value::Key;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of keys from the root to the current position.
///
/// The `Display` form is the diagnostic rendering callers expect in error
/// messages: `root` for the empty path, `root.users.0.name` after descending
/// through `users`, `0`, `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(Vec<Key>);

impl KeyPath {
    /// The empty path: the position of a root accessor.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A new path equal to this one with `key` appended. Allocates a fresh
    /// sequence; `self` is unchanged.
    #[must_use]
    pub fn child(&self, key: Key) -> Self {
        let mut keys = self.0.clone();
        keys.push(key);
        Self(keys)
    }

    /// The keys in order, root first.
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// Number of descent steps from the root.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the root position.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Key>> for KeyPath {
    fn from(keys: Vec<Key>) -> Self {
        Self(keys)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for key in &self.0 {
            write!(f, ".{key}")?;
        }
        Ok(())
    }
}
