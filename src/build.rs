//! Adding documents to an [`InvertedIndex`].
//!
//! Two selection policies:
//! - [`TermSelection::All`]: every distinct token of the document is indexed.
//! - [`TermSelection::MostFrequent`]: only the `n` most frequent distinct tokens are
//!   indexed. Counting is still O(vocabulary) per document, but index growth per document
//!   is capped at `n` entries.
//!
//! Both are monotonic unions over the existing index: re-indexing the same
//! `(doc, text)` is a no-op.

use crate::index::InvertedIndex;
use crate::normalize::Normalizer;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Default `top_n` of [`BuildParams`].
pub const DEFAULT_TOP_N: usize = 1000;

/// Index-construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildParams {
    /// Terms kept per document by the bounded builder.
    pub top_n: usize,
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl BuildParams {
    /// Parameters with a custom `top_n`.
    pub fn with_top_n(top_n: usize) -> Self {
        Self { top_n }
    }
}

/// Which of a document's tokens get indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSelection {
    /// Every distinct token.
    All,
    /// The `n` most frequent distinct tokens (ties: first occurrence wins).
    MostFrequent(usize),
}

/// Normalizes documents and inserts their terms into an index.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    normalizer: Normalizer,
    params: BuildParams,
}

impl IndexBuilder {
    /// Create a builder with default parameters.
    pub fn new(normalizer: Normalizer) -> Self {
        Self::with_params(normalizer, BuildParams::default())
    }

    /// Create a builder with explicit parameters.
    pub fn with_params(normalizer: Normalizer, params: BuildParams) -> Self {
        Self { normalizer, params }
    }

    /// The normalizer applied to document text.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Build parameters.
    pub fn params(&self) -> BuildParams {
        self.params
    }

    /// Index every distinct token of `text` under `doc_id`.
    pub fn index_document(&self, doc_id: &str, text: &str, index: &mut InvertedIndex) {
        self.index_with(doc_id, text, index, TermSelection::All);
    }

    /// Index only the `n` most frequent tokens of `text` under `doc_id`.
    pub fn index_document_top_n(
        &self,
        doc_id: &str,
        text: &str,
        index: &mut InvertedIndex,
        n: usize,
    ) {
        self.index_with(doc_id, text, index, TermSelection::MostFrequent(n));
    }

    /// [`Self::index_document_top_n`] with the configured `top_n`.
    pub fn index_document_bounded(&self, doc_id: &str, text: &str, index: &mut InvertedIndex) {
        self.index_document_top_n(doc_id, text, index, self.params.top_n);
    }

    /// Index one document with an explicit selection policy.
    ///
    /// Returns the number of (term, doc) pairs that were new to the index.
    pub fn index_with(
        &self,
        doc_id: &str,
        text: &str,
        index: &mut InvertedIndex,
        selection: TermSelection,
    ) -> usize {
        let terms = self.select_terms(text, selection);
        apply_terms(doc_id, &terms, index)
    }

    /// Index many `(doc_id, text)` pairs.
    ///
    /// Normalization and term selection run in parallel; insertion happens afterwards,
    /// in input order, so the result equals calling [`Self::index_with`] per document.
    /// Returns the number of new (term, doc) pairs.
    pub fn index_batch<D, T>(
        &self,
        docs: &[(D, T)],
        index: &mut InvertedIndex,
        selection: TermSelection,
    ) -> usize
    where
        D: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        let selected = self.select_batch(docs, selection);
        let inserted = apply_batch(docs, &selected, index);
        tracing::debug!(docs = docs.len(), inserted, "indexed batch");
        inserted
    }

    /// Select terms for many documents in parallel, preserving input order.
    pub fn select_batch<D, T>(
        &self,
        docs: &[(D, T)],
        selection: TermSelection,
    ) -> Vec<Vec<String>>
    where
        D: Sync,
        T: AsRef<str> + Sync,
    {
        docs.par_iter()
            .map(|(_, text)| self.select_terms(text.as_ref(), selection))
            .collect()
    }

    /// Distinct terms of `text` chosen by `selection`.
    ///
    /// `All` yields first-occurrence order; `MostFrequent` yields count order.
    pub fn select_terms(&self, text: &str, selection: TermSelection) -> Vec<String> {
        let tokens = self.normalizer.normalize(text);
        match selection {
            TermSelection::All => distinct_in_order(&tokens),
            TermSelection::MostFrequent(n) => most_frequent_terms(&tokens, n),
        }
    }
}

/// Insert pre-selected terms for each document, in input order.
pub(crate) fn apply_batch<D, T>(
    docs: &[(D, T)],
    selected: &[Vec<String>],
    index: &mut InvertedIndex,
) -> usize
where
    D: AsRef<str>,
{
    docs.iter()
        .zip(selected)
        .map(|((doc_id, _), terms)| apply_terms(doc_id.as_ref(), terms, index))
        .sum()
}

pub(crate) fn apply_terms(doc_id: &str, terms: &[String], index: &mut InvertedIndex) -> usize {
    let inserted = terms.iter().filter(|t| index.insert(t, doc_id)).count();
    tracing::debug!(doc_id, terms = terms.len(), inserted, "indexed document");
    inserted
}

fn distinct_in_order(tokens: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
    tokens
        .iter()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// The `n` most frequent distinct tokens, highest count first.
///
/// Equal counts keep first-occurrence order.
pub fn most_frequent_terms(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 || tokens.is_empty() {
        return Vec::new();
    }

    // (count, first position) per distinct token.
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, token) in tokens.iter().enumerate() {
        counts.entry(token.as_str()).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(term, (count, first))| (term, count, first))
        .collect();
    // Deterministic: count desc, then first occurrence asc.
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
    ranked.truncate(n);
    ranked.into_iter().map(|(term, _, _)| term.to_string()).collect()
}
