//! Flat key-value views used by the shallow comparison.
//!
//! A [`Mapping`] exposes only the entries it stores itself. There is no
//! inherited or hidden layer to filter out, so a scan over [`Mapping::keys`]
//! visits exactly the keys a caller put in.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// An unordered key-value container with unique keys.
pub trait Mapping {
    type Key: ?Sized;
    type Value;

    /// Number of entries.
    fn len(&self) -> usize;

    /// All entries, in the container's own order.
    fn iter(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)> + '_;

    /// Value stored under `key`, if the key is present.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn keys(&self) -> impl Iterator<Item = &Self::Key> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Presence test, independent of what value is stored.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        HashMap::iter(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        BTreeMap::iter(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }
}

impl Mapping for serde_json::Map<String, serde_json::Value> {
    type Key = str;
    type Value = serde_json::Value;

    fn len(&self) -> usize {
        serde_json::Map::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> + '_ {
        serde_json::Map::iter(self).map(|(k, v)| (k.as_str(), v))
    }

    fn get(&self, key: &str) -> Option<&serde_json::Value> {
        serde_json::Map::get(self, key)
    }

    fn contains_key(&self, key: &str) -> bool {
        serde_json::Map::contains_key(self, key)
    }
}

/// Objects expose their members; every other JSON value is a mapping with no
/// keys at all.
impl Mapping for serde_json::Value {
    type Key = str;
    type Value = serde_json::Value;

    fn len(&self) -> usize {
        self.as_object().map_or(0, |map| map.len())
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> + '_ {
        self.as_object()
            .into_iter()
            .flat_map(|map| map.iter())
            .map(|(k, v)| (k.as_str(), v))
    }

    fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}
