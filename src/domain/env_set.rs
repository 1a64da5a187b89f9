//! Ordered `KEY=VALUE` configuration set.

use indexmap::IndexMap;

use super::review;

/// Ordered mapping from env variable name to value.
///
/// Insertion order is the order lines are written to disk. Re-inserting an
/// existing key replaces the value but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSet {
    entries: IndexMap<String, String>,
}

impl EnvSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Copy of this set with one field set. `self` is left untouched.
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.insert(key, value);
        copy
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Env file body: one unquoted `KEY=VALUE` line per entry.
    pub fn to_env_file_contents(&self) -> String {
        self.iter().map(|(key, value)| format!("{key}={value}\n")).collect()
    }

    /// `KEY: value` lines for operator review, with secrets masked.
    pub fn review_lines(&self) -> Vec<String> {
        self.iter().map(|(key, value)| review::review_line(key, value)).collect()
    }
}
