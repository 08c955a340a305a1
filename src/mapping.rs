use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// A key-value source a [`Model`](crate::Model) can look names up in.
///
/// Whether lookups are case-sensitive is up to the implementation: std maps
/// compare keys exactly, [`CaseInsensitiveMap`](crate::CaseInsensitiveMap)
/// upper-cases them.
pub trait Mapping {
    type Value;

    fn get(&self, key: &str) -> Option<&Self::Value>;

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn remove(&mut self, key: &str) -> Option<Self::Value>;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    fn get(&self, key: &str) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &str) -> bool {
        HashMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        HashMap::remove(self, key)
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Value = V;

    fn get(&self, key: &str) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        BTreeMap::remove(self, key)
    }
}
