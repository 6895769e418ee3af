//! Aggregate statistics over an [`InvertedIndex`].

use crate::index::InvertedIndex;
use crate::Error;
use std::collections::HashSet;
use std::fmt;

/// Summary of an index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexStats {
    /// Number of distinct words.
    pub word_count: usize,
    /// Number of distinct document ids across all words.
    pub unique_url_count: usize,
    /// Mean posting-set size: total (word, doc) pairs / `word_count`.
    pub avg_urls_per_word: f64,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "words={} urls={} avg_urls_per_word={:.3}",
            self.word_count, self.unique_url_count, self.avg_urls_per_word
        )
    }
}

/// Compute [`IndexStats`] for `index`.
///
/// Fails with [`Error::EmptyIndex`] when there are no words, since the average is
/// undefined.
pub fn index_statistics(index: &InvertedIndex) -> Result<IndexStats, Error> {
    if index.is_empty() {
        return Err(Error::EmptyIndex);
    }

    let mut urls: HashSet<&str> = HashSet::new();
    let mut pairs = 0usize;
    for (_, docs) in index.iter() {
        pairs += docs.len();
        urls.extend(docs.iter().map(String::as_str));
    }

    let word_count = index.len();
    Ok(IndexStats {
        word_count,
        unique_url_count: urls.len(),
        avg_urls_per_word: pairs as f64 / word_count as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::IndexBuilder;

    #[test]
    fn empty_index_is_an_error() {
        assert_eq!(index_statistics(&InvertedIndex::new()), Err(Error::EmptyIndex));
    }

    #[test]
    fn counts_and_average() {
        let builder = IndexBuilder::default();
        let mut ix = InvertedIndex::new();
        builder.index_document("a.com", "el perro corre", &mut ix);
        builder.index_document("b.com", "el gato corre", &mut ix);

        let s = index_statistics(&ix).unwrap();
        assert_eq!(s.word_count, 3);
        assert_eq!(s.unique_url_count, 2);
        assert!((s.avg_urls_per_word - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(s.to_string(), "words=3 urls=2 avg_urls_per_word=1.333");
    }
}
