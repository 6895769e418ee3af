//! Boolean keyword queries over an [`InvertedIndex`].
//!
//! Queries are normalized with the same [`Normalizer`] used at indexing time. Every
//! public search here is total: text that normalizes to nothing matches nothing.

use crate::index::{DocSet, InvertedIndex};
use crate::normalize::Normalizer;
use crate::Error;

/// How the terms of a phrase are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// Documents containing at least one term.
    #[default]
    Or,
    /// Documents containing every term.
    And,
}

/// A normalized, non-empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Normalize `phrase` into a query.
    ///
    /// Fails with [`Error::EmptyQuery`] when nothing survives normalization.
    pub fn parse(phrase: &str, normalizer: &Normalizer) -> Result<Self, Error> {
        let terms = normalizer.normalize(phrase);
        if terms.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Self { terms })
    }

    /// Normalized terms, in phrase order (duplicates kept).
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// First term of the query.
    pub fn first(&self) -> &str {
        // Non-empty by construction.
        &self.terms[0]
    }

    /// Evaluate against `index`.
    pub fn evaluate(&self, index: &InvertedIndex, mode: QueryMode) -> DocSet {
        match mode {
            QueryMode::Or => union_of(&self.terms, index),
            QueryMode::And => intersection_of(&self.terms, index),
        }
    }
}

fn union_of(terms: &[String], index: &InvertedIndex) -> DocSet {
    let mut out = DocSet::new();
    for term in terms {
        if let Some(docs) = index.docs(term) {
            out.extend(docs.iter().cloned());
        }
    }
    out
}

fn intersection_of(terms: &[String], index: &InvertedIndex) -> DocSet {
    let mut sets = Vec::with_capacity(terms.len());
    for term in terms {
        match index.docs(term) {
            Some(docs) => sets.push(docs),
            // An absent term empties the whole intersection.
            None => return DocSet::new(),
        }
    }
    // Start from the smallest set; intersection is order-independent.
    sets.sort_by_key(|s| s.len());
    let Some((smallest, rest)) = sets.split_first() else {
        return DocSet::new();
    };
    smallest
        .iter()
        .filter(|doc| rest.iter().all(|s| s.contains(*doc)))
        .cloned()
        .collect()
}

/// Normalizes query text and evaluates it against an index.
#[derive(Debug, Clone, Default)]
pub struct QueryEvaluator {
    normalizer: Normalizer,
}

impl QueryEvaluator {
    /// Create an evaluator; use the same normalizer as the index builder.
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// The normalizer applied to query text.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalize `phrase`, or `None` if it is empty after normalization.
    fn parse(&self, phrase: &str) -> Option<Query> {
        match Query::parse(phrase, &self.normalizer) {
            Ok(q) => Some(q),
            Err(e) => {
                tracing::debug!(phrase, error = %e, "query matches nothing");
                None
            }
        }
    }

    /// Documents containing `word`.
    ///
    /// `word` is normalized and only its first token is looked up. Returns an owned copy,
    /// so the index cannot be mutated through the result.
    pub fn lookup_word(&self, word: &str, index: &InvertedIndex) -> DocSet {
        let Some(query) = self.parse(word) else {
            return DocSet::new();
        };
        index.docs(query.first()).cloned().unwrap_or_default()
    }

    /// Documents containing at least one word of `phrase`.
    pub fn search_or(&self, phrase: &str, index: &InvertedIndex) -> DocSet {
        self.search(phrase, index, QueryMode::Or)
    }

    /// Documents containing every word of `phrase`.
    pub fn search_and(&self, phrase: &str, index: &InvertedIndex) -> DocSet {
        self.search(phrase, index, QueryMode::And)
    }

    /// Evaluate `phrase` with the given mode.
    pub fn search(&self, phrase: &str, index: &InvertedIndex, mode: QueryMode) -> DocSet {
        let Some(query) = self.parse(phrase) else {
            return DocSet::new();
        };
        let hits = query.evaluate(index, mode);
        tracing::trace!(?mode, terms = query.terms().len(), hits = hits.len(), "search");
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::IndexBuilder;

    fn docs(items: &[&str]) -> DocSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> InvertedIndex {
        let b = IndexBuilder::default();
        let mut ix = InvertedIndex::new();
        b.index_document("a.com", "el perro corre", &mut ix);
        b.index_document("b.com", "el gato corre", &mut ix);
        b.index_document("c.com", "un gato duerme", &mut ix);
        ix
    }

    #[test]
    fn parse_rejects_empty_normalization() {
        let n = Normalizer::default();
        assert_eq!(Query::parse("el la ¿?", &n), Err(Error::EmptyQuery));
        let q = Query::parse("¡Perro! gato", &n).unwrap();
        assert_eq!(q.terms(), ["perro", "gato"]);
        assert_eq!(q.first(), "perro");
    }

    #[test]
    fn lookup_uses_first_token_only() {
        let ix = sample();
        let q = QueryEvaluator::default();
        assert_eq!(q.lookup_word("Gato", &ix), docs(&["b.com", "c.com"]));
        assert_eq!(q.lookup_word("perro gato", &ix), docs(&["a.com"]));
        assert!(q.lookup_word("pájaro", &ix).is_empty());
    }

    #[test]
    fn lookup_of_stop_word_or_punctuation_is_empty() {
        let ix = sample();
        let q = QueryEvaluator::default();
        assert!(q.lookup_word("el", &ix).is_empty());
        assert!(q.lookup_word("?!", &ix).is_empty());
        assert!(q.lookup_word("", &ix).is_empty());
    }

    #[test]
    fn or_is_union() {
        let ix = sample();
        let q = QueryEvaluator::default();
        assert_eq!(q.search_or("perro duerme", &ix), docs(&["a.com", "c.com"]));
        assert_eq!(q.search_or("pájaro", &ix), DocSet::new());
        assert_eq!(q.search_or("", &ix), DocSet::new());
    }

    #[test]
    fn and_is_intersection() {
        let ix = sample();
        let q = QueryEvaluator::default();
        assert_eq!(q.search_and("gato corre", &ix), docs(&["b.com"]));
        assert_eq!(q.search_and("gato", &ix), docs(&["b.com", "c.com"]));
        assert!(q.search_and("gato pájaro", &ix).is_empty());
        assert!(q.search_and("de la", &ix).is_empty());
    }

    #[test]
    fn search_dispatches_on_mode() {
        let ix = sample();
        let q = QueryEvaluator::default();
        assert_eq!(q.search("perro gato", &ix, QueryMode::Or).len(), 3);
        assert!(q.search("perro gato", &ix, QueryMode::And).is_empty());
        assert_eq!(QueryMode::default(), QueryMode::Or);
    }
}
