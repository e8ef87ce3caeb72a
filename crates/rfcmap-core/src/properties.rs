use indexmap::IndexMap;

/// Resolved configuration: an insertion-ordered map of string keys to string
/// values.
///
/// Keys are dotted paths such as `connection.ashost`. The core treats values
/// as opaque strings; a namespace is selected with [`Properties::namespace`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Properties {
    entries: IndexMap<String, String>,
}

impl Properties {
    pub fn new() -> Properties {
        Properties::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets `key` to `value`, returning the previous value. An existing key
    /// keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the entries under `prefix` with the prefix (and the following
    /// `.`) stripped from their keys.
    ///
    /// ```
    /// # use rfcmap_core::Properties;
    /// let mut props = Properties::new();
    /// props.set("connection.ashost", "10.0.0.1");
    /// props.set("mapping.types", "FLIGHT_LIST");
    ///
    /// let connection = props.namespace("connection");
    /// assert_eq!(connection.get("ashost"), Some("10.0.0.1"));
    /// assert_eq!(connection.len(), 1);
    /// ```
    pub fn namespace(&self, prefix: &str) -> Properties {
        let prefix = prefix.trim_end_matches('.');

        self.entries
            .iter()
            .filter_map(|(key, value)| {
                let rest = key.strip_prefix(prefix)?.strip_prefix('.')?;
                Some((rest.to_string(), value.clone()))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        props.extend(iter);
        props
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Properties {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
