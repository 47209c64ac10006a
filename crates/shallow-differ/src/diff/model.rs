//! Diff output type.

use serde::{Deserialize, Serialize};

/// Keys that differ between mapping A and mapping B, each list sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShallowDiff<K> {
    /// Keys present in B but not A
    pub added: Vec<K>,
    /// Keys present in A but not B
    pub removed: Vec<K>,
    /// Keys present in both whose values are not strictly equal
    pub changed: Vec<K>,
}

impl<K> ShallowDiff<K> {
    pub fn empty() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
        }
    }

    /// True when A and B are shallow-equal
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// True when the key sets differ
    pub fn keys_changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }

    /// Total number of differing keys
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}

impl<K> Default for ShallowDiff<K> {
    fn default() -> Self {
        Self::empty()
    }
}
