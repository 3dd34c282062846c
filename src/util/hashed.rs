use std::collections::BTreeMap;
use std::ops::Deref;

/// An ordered map usable as a hash-map key.
///
/// Entry order is deterministic (`BTreeMap`), so equal maps hash
/// equally. Used to key caches by configuration-like dictionaries.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashableMap<K: Ord, V>(BTreeMap<K, V>);

impl<K: Ord, V> HashableMap<K, V> {
    pub fn new() -> Self {
        HashableMap(BTreeMap::new())
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.0.insert(key, value)
    }
}

impl<K: Ord, V> Deref for HashableMap<K, V> {
    type Target = BTreeMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for HashableMap<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        HashableMap(map)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for HashableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        HashableMap(iter.into_iter().collect())
    }
}
