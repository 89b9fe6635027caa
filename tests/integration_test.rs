// Integration tests for textsim
use async_trait::async_trait;
use std::sync::Arc;
use textsim::{
    compare, compare_full, compare_full_detailed, compare_tokenizations, cosine, cosine_similarity,
    exact_match, fuzzy_score, jaccard_score, levenshtein, overlap_ratio, tokenize,
    EmbeddingProvider, Error, HashingProvider, MemorySink, Method, ProviderError,
    SemanticOutcome, SemanticSimilarity, SimilarityResult, Tokenization, Vector,
};

struct UnreachableProvider;

#[async_trait]
impl EmbeddingProvider for UnreachableProvider {
    fn model(&self) -> &str {
        "unreachable"
    }

    async fn embed(&self, _inputs: &[&str]) -> Result<Vec<Vec<f32>>, ProviderError> {
        Err(ProviderError::Transport("dns lookup failed".to_string()))
    }
}

/// Returns the same fixed vectors for every request
struct FixedProvider(Vec<Vec<f32>>);

#[async_trait]
impl EmbeddingProvider for FixedProvider {
    fn model(&self) -> &str {
        "fixed"
    }

    async fn embed(&self, _inputs: &[&str]) -> Result<Vec<Vec<f32>>, ProviderError> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_edit_distance_scenarios() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("sitting", "kitten"), 3);
    assert!((fuzzy_score("hello", "hallo") - 0.8).abs() < 1e-6);
    assert_eq!(fuzzy_score("", ""), 1.0);
    assert_eq!(fuzzy_score("abc", "abc"), 1.0);
}

#[test]
fn test_word_jaccard_scenario() {
    let result = jaccard_score("hello world", "hello there", Tokenization::Word).unwrap();
    match &result {
        SimilarityResult::Word(overlap) => {
            assert_eq!(overlap.matches, vec!["hello"]);
            assert_eq!(overlap.intersection, 1);
            assert_eq!(overlap.union, 3);
            assert!((overlap.score - 0.333).abs() < 1e-3);
        }
        other => panic!("expected word result, got {:?}", other),
    }
}

#[test]
fn test_result_json_shape() {
    let report = compare("quick brown fox", "quick brown dog");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["fuzzy"]["method"], "fuzzy");
    assert_eq!(json["fuzzy"]["distance"], 2);
    assert!(json["fuzzy"].get("matches").is_none());

    assert_eq!(json["jaccard"]["method"], "word");
    assert_eq!(json["jaccard"]["matches"], serde_json::json!(["brown", "quick"]));
    assert!(json["jaccard"].get("distance").is_none());

    let back: textsim::StringComparison = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_tokenization_report() {
    let report = compare_tokenizations("hello world", "hello universe", 3).unwrap();
    assert_eq!(report.char.method(), Method::Char);
    assert_eq!(report.word.method(), Method::Word);
    assert_eq!(report.ngram.method(), Method::Ngram);
    for result in [&report.char, &report.word, &report.ngram] {
        let overlap = result.overlap().unwrap();
        assert!(overlap.intersection <= overlap.union);
        assert!((0.0..=1.0).contains(&result.score()));
    }
    assert!(report.char.score() > report.ngram.score());
}

#[test]
fn test_input_constraint_violations() {
    assert_eq!(
        tokenize("hello", Tokenization::NGram(0)).unwrap_err(),
        Error::InvalidNgramSize(0)
    );
    assert!(compare_tokenizations("a", "b", 0).is_err());
    assert_eq!(
        cosine_similarity(&[1.0, 2.0, 3.0], &[1.0]).unwrap_err(),
        Error::InvalidDimension { expected: 3, actual: 1 }
    );
}

#[test]
fn test_cosine_properties() {
    let v = Vector::new((1..=40).map(|i| (i as f32).sin()).collect());
    assert!((v.cosine_similarity(&v).unwrap() - 1.0).abs() < 1e-5);
    assert!((v.cosine_similarity(&(&v * -1.0)).unwrap() + 1.0).abs() < 1e-5);

    let zero = vec![0.0f32; 40];
    assert!(cosine(v.as_slice(), &zero).unwrap().is_zero_magnitude());
}

#[test]
fn test_scalar_scorers() {
    assert_eq!(exact_match("hello world", "hello world"), 1.0);
    assert_eq!(exact_match("hello world", "hello"), 0.0);
    assert_eq!(overlap_ratio("", "hello"), 0.0);
    assert_eq!(overlap_ratio("hello world", "world hello"), 1.0);
}

#[tokio::test]
async fn test_semantic_failure_is_contained() {
    let sink = Arc::new(MemorySink::new());
    let semantic = SemanticSimilarity::new(Arc::new(UnreachableProvider)).with_sink(sink.clone());

    assert_eq!(semantic.similarity("hello", "world").await, 0.0);
    assert_eq!(sink.len(), 1);

    let report = compare_full(&semantic, "hello world", "hello there").await;
    assert_eq!(report.semantic, 0.0);
    assert!((report.jaccard - 1.0 / 3.0).abs() < 1e-6);
    assert_eq!(sink.len(), 2);
}

#[tokio::test]
async fn test_semantic_uses_provider_vectors() {
    let semantic = SemanticSimilarity::new(Arc::new(FixedProvider(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
    ])))
    .with_sink(Arc::new(MemorySink::new()));

    let full = compare_full_detailed(&semantic, "x", "y").await;
    match full.semantic {
        SemanticOutcome::Measured { score } => assert!((score - 0.974_631_8).abs() < 1e-5),
        other => panic!("expected a measurement, got {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_semantic_calls_are_independent() {
    let semantic = Arc::new(SemanticSimilarity::new(Arc::new(HashingProvider::default())));
    let mut handles = Vec::new();
    for i in 0..8 {
        let semantic = semantic.clone();
        handles.push(tokio::spawn(async move {
            let text = format!("document number {}", i);
            semantic.similarity(&text, &text).await
        }));
    }
    for handle in handles {
        assert!((handle.await.unwrap() - 1.0).abs() < 1e-5);
    }
}
