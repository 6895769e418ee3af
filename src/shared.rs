//! A lock-protected index for concurrent indexing and querying.
//!
//! Many readers (queries, statistics) or one writer, never both. Normalization and
//! term selection run before the write lock is taken, so writers hold it only for the
//! set insertions.

use crate::build::{apply_batch, apply_terms, IndexBuilder, TermSelection};
use crate::index::{DocSet, InvertedIndex};
use crate::query::{QueryEvaluator, QueryMode};
use crate::stats::{index_statistics, IndexStats};
use crate::Error;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to an index shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<InvertedIndex>>,
    builder: IndexBuilder,
    evaluator: QueryEvaluator,
}

impl SharedIndex {
    /// Wrap `index`, using `builder`'s normalizer for both indexing and queries.
    pub fn new(index: InvertedIndex, builder: IndexBuilder) -> Self {
        let evaluator = QueryEvaluator::new(builder.normalizer().clone());
        Self {
            inner: Arc::new(RwLock::new(index)),
            builder,
            evaluator,
        }
    }

    /// Index every distinct token of `text` under `doc_id`.
    pub fn index_document(&self, doc_id: &str, text: &str) -> usize {
        self.index_with(doc_id, text, TermSelection::All)
    }

    /// Index the `n` most frequent tokens of `text` under `doc_id`.
    pub fn index_document_top_n(&self, doc_id: &str, text: &str, n: usize) -> usize {
        self.index_with(doc_id, text, TermSelection::MostFrequent(n))
    }

    /// Index one document; returns the number of new (term, doc) pairs.
    pub fn index_with(&self, doc_id: &str, text: &str, selection: TermSelection) -> usize {
        let terms = self.builder.select_terms(text, selection);
        apply_terms(doc_id, &terms, &mut self.inner.write())
    }

    /// Index a batch of documents; selection runs in parallel before one write lock.
    pub fn index_batch<D, T>(&self, docs: &[(D, T)], selection: TermSelection) -> usize
    where
        D: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        let selected = self.builder.select_batch(docs, selection);
        apply_batch(docs, &selected, &mut self.inner.write())
    }

    /// Documents containing `word` (first normalized token).
    pub fn lookup_word(&self, word: &str) -> DocSet {
        self.evaluator.lookup_word(word, &self.inner.read())
    }

    /// Documents containing any word of `phrase`.
    pub fn search_or(&self, phrase: &str) -> DocSet {
        self.search(phrase, QueryMode::Or)
    }

    /// Documents containing every word of `phrase`.
    pub fn search_and(&self, phrase: &str) -> DocSet {
        self.search(phrase, QueryMode::And)
    }

    /// Evaluate `phrase` with the given mode.
    pub fn search(&self, phrase: &str, mode: QueryMode) -> DocSet {
        self.evaluator.search(phrase, &self.inner.read(), mode)
    }

    /// Statistics over the current contents.
    pub fn statistics(&self) -> Result<IndexStats, Error> {
        index_statistics(&self.inner.read())
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Clone of the current index.
    pub fn snapshot(&self) -> InvertedIndex {
        self.inner.read().clone()
    }
}
