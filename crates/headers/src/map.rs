//! Ordered header mapping.
//!
//! [`HeaderMap`] is the key/value collection the store serializes into a
//! native list. Insertion order is preserved and becomes wire order.
//! Duplicate keys are allowed and each occurrence produces its own list
//! entry; nothing is merged, overwritten, or normalized.

/// An ordered, duplicate-tolerant mapping from header names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key/value pair, keeping any earlier occurrences of the key.
    pub fn append<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.entries.push((key.into(), value.into()));
    }

    /// Returns the value of the first entry whose key matches `key` exactly.
    ///
    /// No case folding is applied; keys are compared byte for byte.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl<K, V> Extend<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl From<Vec<(String, String)>> for HeaderMap {
    fn from(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for HeaderMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let map = HeaderMap::from_iter([("B", "2"), ("A", "1"), ("C", "3")]);
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["B", "A", "C"]);
    }

    #[test]
    fn duplicate_keys_keep_every_occurrence() {
        let mut map = HeaderMap::new();
        map.append("Accept", "text/html");
        map.append("Accept", "application/json");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Accept"), Some("text/html"));
    }

    #[test]
    fn get_matches_exactly_without_case_folding() {
        let map = HeaderMap::from_iter([("Accept", "*/*")]);
        assert_eq!(map.get("Accept"), Some("*/*"));
        assert_eq!(map.get("accept"), None);
    }

    #[test]
    fn extend_appends_after_existing_entries() {
        let mut map = HeaderMap::from_iter([("A", "1")]);
        map.extend([("B", "2")]);
        let entries: Vec<(&str, &str)> = map.iter().collect();
        assert_eq!(entries, [("A", "1"), ("B", "2")]);
    }
}
