use std::collections::HashMap;

/// A single record keyed by header name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Build a row by zipping headers with values
    ///
    /// Missing values are filled with empty strings and surplus values are dropped.
    pub fn from_record<'a>(
        headers: &[String],
        values: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut values = values.into_iter();
        let mut row = Self::new();
        for header in headers {
            row.insert_value(header, values.next().unwrap_or_default());
        }
        row
    }

    pub fn insert_value(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Values ordered by given headers
    pub fn to_vector<'a>(&'a self, headers: &[String]) -> Vec<&'a str> {
        headers
            .iter()
            .map(|h| self.get_value(h).unwrap_or_default())
            .collect()
    }

    /// Whether key set is exactly the given headers
    pub fn matches_headers(&self, headers: &[String]) -> bool {
        self.values.len() == headers.len() && headers.iter().all(|h| self.contains_key(h))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = Self::new();
        for (key, value) in iter {
            row.insert_value(key.as_ref(), value.as_ref());
        }
        row
    }
}
