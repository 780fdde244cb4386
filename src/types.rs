//! The glossary mapping shared by the parser and the site generator.
//!
//! A [`Glossary`] is built once by [`crate::parse`] and then handed by
//! reference to [`crate::generate`]. Nothing mutates it after parsing.

use std::collections::BTreeMap;

/// Term → definition mapping.
///
/// Terms are non-empty, trimmed, and case-sensitive. Definitions are the
/// stanza's definition lines joined with `\n`, without a trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    entries: BTreeMap<String, String>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term, replacing any earlier definition (last write wins).
    pub fn insert(&mut self, term: impl Into<String>, definition: impl Into<String>) {
        self.entries.insert(term.into(), definition.into());
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(term, definition)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All terms, sorted by code-point order.
    ///
    /// Both the index listing and the term-page write order come from here.
    /// `String`'s `Ord` compares UTF-8 bytes, which orders the same as
    /// Unicode code points, so uppercase sorts before lowercase.
    pub fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// `(term, definition)` pairs in the same order as [`sorted_terms`](Self::sorted_terms).
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Glossary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut glossary = Glossary::new();
        for (term, definition) in iter {
            glossary.insert(term, definition);
        }
        glossary
    }
}
