// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Ordered, case-insensitive parameter storage for properties and values.
//!
//! Every typed value object owns one [`Parameters`] store; the typed accessor
//! layer reads and writes it exclusively through the operations below. A key
//! that is absent means "not set", which is distinct from a key holding an
//! empty string.

/// Named, possibly multi-valued, raw text attributes attached to a property
/// or value.
///
/// Keys are matched ASCII-case-insensitively. Insertion order of distinct
/// keys is preserved, replacing the values of an existing key keeps its
/// position, and the first-seen spelling of a key is retained for rendering.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    values: Vec<String>,
}

impl Parameters {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// First value for `name`, or `None` if the key is absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entry(name)
            .and_then(|e| e.values.first())
            .map(String::as_str)
    }

    /// All values for `name` in order; empty if the key is absent.
    #[must_use]
    pub fn get_many(&self, name: &str) -> &[String] {
        match self.entry(name) {
            Some(e) => &e.values,
            None => &[],
        }
    }

    /// Replace all values for `name` with a single value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.set_many(name, vec![value.into()]);
    }

    /// Replace all values for `name`.
    pub fn set_many(&mut self, name: &str, values: Vec<String>) {
        match self.entry_mut(name) {
            Some(e) => e.values = values,
            None => self.entries.push(Entry {
                name: name.to_owned(),
                values,
            }),
        }
    }

    /// Remove `name` and all its values.
    pub fn remove(&mut self, name: &str) {
        self.entries
            .retain(|e| !e.name.eq_ignore_ascii_case(name));
    }

    /// Whether `name` is present in the store.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.values.as_slice()))
    }

    /// Append one more value to `name`, creating the key if needed.
    ///
    /// Used by the grammar when a parameter name repeats on a content line.
    pub(crate) fn append(&mut self, name: &str, value: String) {
        match self.entry_mut(name) {
            Some(e) => e.values.push(value),
            None => self.entries.push(Entry {
                name: name.to_owned(),
                values: vec![value],
            }),
        }
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }
}
