use std::collections::HashMap;

/// String-keyed map with case-insensitive lookup that preserves the
/// casing of the most recent insert.
///
/// Attribute and category names arrive from upstream tools with
/// inconsistent casing; lookups must not care, but round-tripped
/// output should keep the caller's spelling.
#[derive(Debug, Default, Clone)]
pub struct CaseInsensitiveMap<V> {
    // lowercased key -> (original-case key, value)
    inner: HashMap<String, (String, V)>,
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        CaseInsensitiveMap {
            inner: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Inserts `value` under `key`, replacing any entry whose key
    /// differs only by case. The stored key casing follows this insert.
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        self.inner
            .insert(key.to_lowercase(), (key, value))
            .map(|(_, v)| v)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.inner.get(&key.to_lowercase()).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(&key.to_lowercase())
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.inner.remove(&key.to_lowercase()).map(|(_, v)| v)
    }

    /// Iterates `(original-case key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.inner.values().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> FromIterator<(String, V)> for CaseInsensitiveMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = CaseInsensitiveMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
