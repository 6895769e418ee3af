//! `kwindex`: an in-memory inverted keyword index.
//!
//! The crate maps normalized words to the set of document ids (URLs) they occur in, and
//! answers boolean queries over that mapping:
//! - [`normalize`] turns raw text into lowercase, punctuation/digit-stripped tokens with
//!   stop words removed.
//! - [`build`] adds documents to an [`InvertedIndex`], either every token or only the
//!   `top_n` most frequent ones.
//! - [`query`] answers single-word, OR and AND lookups.
//! - [`stats`] summarizes an index (word count, distinct documents, documents per word).
//! - [`shared`] wraps an index in a reader/writer lock for concurrent use.
//!
//! Scope:
//! - Set-membership semantics only (a word occurs in a document or it does not)
//! - Caller-owned indexes (no persistence, no crawling)
//! - Deterministic results (ordered sets, first-occurrence tie-break in top-N selection)
//!
//! Non-goals:
//! - Ranking / scoring
//! - Phrase, wildcard or fuzzy queries
//! - Stemming
//!
//! ```
//! use kwindex::{IndexBuilder, InvertedIndex, QueryEvaluator};
//!
//! let builder = IndexBuilder::default();
//! let mut index = InvertedIndex::new();
//! builder.index_document("a.com", "el perro corre", &mut index);
//! builder.index_document("b.com", "el gato corre", &mut index);
//!
//! let query = QueryEvaluator::default();
//! assert_eq!(query.search_or("perro gato", &index).len(), 2);
//! assert!(query.search_and("perro gato", &index).is_empty());
//! ```

pub mod build;
pub mod index;
pub mod normalize;
pub mod query;
pub mod shared;
pub mod stats;

pub use build::{BuildParams, IndexBuilder, TermSelection};
pub use error::Error;
pub use index::{DocId, DocSet, InvertedIndex, Term};
pub use normalize::{Normalizer, Vocabulary};
pub use query::{Query, QueryEvaluator, QueryMode};
pub use shared::SharedIndex;
pub use stats::{index_statistics, IndexStats};

mod error {
    /// Errors for index construction and lookup.
    #[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        /// Query text normalized to zero tokens.
        #[error("empty query")]
        EmptyQuery,
        /// Index contains no words.
        #[error("empty index")]
        EmptyIndex,
    }
}
