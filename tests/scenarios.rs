//! End-to-end scenarios: normalize, index, query, summarize.

use kwindex::{
    index_statistics, DocSet, Error, IndexBuilder, InvertedIndex, Normalizer, QueryEvaluator,
    Vocabulary,
};

fn docs(items: &[&str]) -> DocSet {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn greeting_normalizes_to_two_words() {
    let n = Normalizer::default();
    assert_eq!(n.normalize("¡Hola, Mundo!"), vec!["hola", "mundo"]);
}

#[test]
fn or_and_queries_over_two_documents() {
    let builder = IndexBuilder::default();
    let mut index = InvertedIndex::new();
    builder.index_document("a.com", "el perro corre", &mut index);
    builder.index_document("b.com", "el gato corre", &mut index);

    let q = QueryEvaluator::default();
    assert_eq!(q.search_or("perro gato", &index), docs(&["a.com", "b.com"]));
    assert_eq!(q.search_and("perro gato", &index), DocSet::new());
    assert_eq!(q.search_and("corre", &index), docs(&["a.com", "b.com"]));
    // Stop words never become keys.
    assert!(!index.contains_term("el"));
}

#[test]
fn statistics_on_empty_index_is_reported() {
    assert_eq!(index_statistics(&InvertedIndex::new()), Err(Error::EmptyIndex));
}

#[test]
fn top_n_drops_least_frequent_token() {
    // "a" is a Spanish stop word, so use a vocabulary without it.
    let vocab = Vocabulary::default().with_stop_words(Vec::<String>::new());
    let builder = IndexBuilder::new(Normalizer::new(vocab));
    let mut index = InvertedIndex::new();
    builder.index_document_top_n("c.com", "a a a b b c", &mut index, 2);

    assert_eq!(index.docs("a"), Some(&docs(&["c.com"])));
    assert_eq!(index.docs("b"), Some(&docs(&["c.com"])));
    assert_eq!(index.docs("c"), None);
}

#[test]
fn top_n_with_default_vocabulary_skips_stop_words() {
    let builder = IndexBuilder::default();
    let mut index = InvertedIndex::new();
    builder.index_document_top_n("c.com", "a a a b b c", &mut index, 2);

    let mut terms: Vec<&str> = index.terms().collect();
    terms.sort_unstable();
    assert_eq!(terms, vec!["b", "c"]);
}

#[test]
fn statistics_over_small_corpus() {
    let builder = IndexBuilder::default();
    let mut index = InvertedIndex::new();
    builder.index_document("a.com", "el perro corre", &mut index);
    builder.index_document("b.com", "el gato corre", &mut index);

    let stats = index_statistics(&index).unwrap();
    assert_eq!(stats.word_count, 3);
    assert_eq!(stats.unique_url_count, 2);
    assert!((stats.avg_urls_per_word - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn lookup_result_is_a_copy() {
    let builder = IndexBuilder::default();
    let mut index = InvertedIndex::new();
    builder.index_document("a.com", "perro", &mut index);

    let q = QueryEvaluator::default();
    let mut hits = q.lookup_word("perro", &index);
    hits.insert("evil.com".to_string());
    assert_eq!(q.lookup_word("perro", &index), docs(&["a.com"]));
}

#[test]
fn queries_use_the_injected_vocabulary() {
    let vocab = Vocabulary::new(["the", "a"], ",.!".chars());
    let normalizer = Normalizer::new(vocab);
    let builder = IndexBuilder::new(normalizer.clone());
    let q = QueryEvaluator::new(normalizer);

    let mut index = InvertedIndex::new();
    builder.index_document("x.org", "The dog barks.", &mut index);
    builder.index_document("y.org", "A cat, a dog!", &mut index);

    assert_eq!(q.search_and("the DOG", &index), docs(&["x.org", "y.org"]));
    assert_eq!(q.search_and("dog cat", &index), docs(&["y.org"]));
    assert!(q.lookup_word("the", &index).is_empty());
}
