use std::collections::{hash_map, HashMap};

use compact_str::CompactString;

use crate::Mapping;

/// A map whose keys are compared case-insensitively.
///
/// Keys are upper-cased on insertion and on every lookup, so `firstname`,
/// `FirstName` and `FIRSTNAME` all name the same entry. Iteration yields the
/// upper-cased keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseInsensitiveMap<V> {
    inner: HashMap<CompactString, V>,
}

fn fold(key: &str) -> CompactString {
    key.to_uppercase().into()
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the one previously stored under any casing
    /// of `key`.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.inner.insert(fold(key), value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.inner.get(fold(key).as_str())
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.inner.get_mut(fold(key).as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(fold(key).as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.inner.remove(fold(key).as_str())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> CaseInsensitiveIter<'_, V> {
        CaseInsensitiveIter(self.inner.iter())
    }
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Mapping for CaseInsensitiveMap<V> {
    type Value = V;

    fn get(&self, key: &str) -> Option<&V> {
        CaseInsensitiveMap::get(self, key)
    }

    fn contains_key(&self, key: &str) -> bool {
        CaseInsensitiveMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        CaseInsensitiveMap::remove(self, key)
    }
}

impl<K, V> FromIterator<(K, V)> for CaseInsensitiveMap<V>
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for CaseInsensitiveMap<V>
where
    K: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

/// Iterator over the entries of a [`CaseInsensitiveMap`], in arbitrary order.
#[derive(Clone, Debug)]
pub struct CaseInsensitiveIter<'a, V>(hash_map::Iter<'a, CompactString, V>);

impl<'a, V> Iterator for CaseInsensitiveIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, V> IntoIterator for &'a CaseInsensitiveMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = CaseInsensitiveIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::CaseInsensitiveMap;

    #[test]
    fn any_casing_hits() {
        let map: CaseInsensitiveMap<_> = [("FirstName", "Bob")].into_iter().collect();

        assert_eq!(map.get("firstname"), Some(&"Bob"));
        assert_eq!(map.get("FIRSTNAME"), Some(&"Bob"));
        assert!(map.contains_key("fIrStNaMe"));
        assert!(!map.contains_key("lastname"));
    }

    #[test]
    fn insert_replaces_other_casing() {
        let mut map = CaseInsensitiveMap::new();
        assert_eq!(map.insert("club", 1), None);
        assert_eq!(map.insert("CLUB", 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("CLUB", &2)]);
    }

    #[test]
    fn remove_and_get_mut() {
        let mut map = CaseInsensitiveMap::new();
        map.insert("No", String::from("1"));

        map.get_mut("no").unwrap().push('0');
        assert_eq!(map.remove("NO").as_deref(), Some("10"));
        assert!(map.is_empty());
        assert_eq!(map.remove("no"), None);
    }

    #[test]
    fn non_ascii_keys() {
        let mut map = CaseInsensitiveMap::new();
        map.insert("straße", ());
        assert!(map.contains_key("STRASSE"));
        assert!(map.contains_key("Straße"));
    }
}
