//! The inverted index: normalized word -> set of document ids.

use std::collections::{BTreeSet, HashMap};

/// Opaque document identifier (a URL in practice).
pub type DocId = String;

/// A normalized word, as produced by [`crate::Normalizer`].
pub type Term = String;

/// Ordered, duplicate-free set of document ids.
pub type DocSet = BTreeSet<DocId>;

/// Inverted index over caller-supplied documents.
///
/// Writes only ever add (term, doc) pairs; nothing is removed. Reads hand out shared
/// borrows or owned copies, never mutable access to a posting set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: HashMap<Term, DocSet>,
}

impl InvertedIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether no term has been indexed.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Add `doc_id` to the posting set of `term`, creating the set if needed.
    ///
    /// Returns whether the pair was new. Only builder code may call this, so every key
    /// is normalizer output.
    pub(crate) fn insert(&mut self, term: &str, doc_id: &str) -> bool {
        // Avoid allocating the key when the term already exists.
        if let Some(docs) = self.postings.get_mut(term) {
            if docs.contains(doc_id) {
                return false;
            }
            return docs.insert(doc_id.to_string());
        }
        let mut docs = DocSet::new();
        docs.insert(doc_id.to_string());
        self.postings.insert(term.to_string(), docs);
        true
    }

    /// Documents containing `term` (already normalized), if any.
    pub fn docs(&self, term: &str) -> Option<&DocSet> {
        self.postings.get(term)
    }

    /// Whether `term` (already normalized) is a key.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Iterate all distinct terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.postings.keys().map(|t| t.as_str())
    }

    /// Iterate `(term, docs)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocSet)> + '_ {
        self.postings.iter().map(|(t, d)| (t.as_str(), d))
    }

    /// Total number of (term, doc) pairs.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(BTreeSet::len).sum()
    }
}
