//! Whole-pipeline tests over the built-in lexicon.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use sense_lexicon::builtin;
use sense_neural::{RelevanceScorer, Result as NeuralResult};
use sense_rank::Disambiguator;
use std::sync::Arc;

/// Deterministic scorer that prefers glosses mentioning money. Keeps the
/// neural signal under test control without model files.
struct MoneyScorer;

#[async_trait]
impl RelevanceScorer for MoneyScorer {
    async fn relevance_batch(&self, _sentence: &str, glosses: &[String]) -> NeuralResult<Vec<f32>> {
        Ok(glosses
            .iter()
            .map(|g| {
                let g = g.to_lowercase();
                if g.contains("money") || g.contains("financial") {
                    0.85
                } else {
                    0.15
                }
            })
            .collect())
    }
}

fn disambiguator() -> Disambiguator {
    let lexicon = builtin().expect("built-in lexicon parses");
    Disambiguator::new(Arc::new(lexicon), Arc::new(MoneyScorer))
}

#[tokio::test]
async fn deposit_sentence_selects_the_financial_bank() {
    let d = disambiguator();
    let out = d
        .disambiguate("I went to the bank to deposit money.", "bank")
        .await
        .expect("pipeline succeeds");

    let best = out.best.expect("a best sense");
    assert_eq!(best.sense.key, "bank.n.02");
    assert!(best.knowledge >= 2, "expected gloss overlap, got {}", best.knowledge);
    assert!(best.neural > 0.5);

    // The river sense survives but ranks lower.
    let river = out
        .ranked
        .iter()
        .find(|c| c.sense.key == "bank.n.01")
        .expect("river sense present");
    assert!(river.rank > best.rank);
}

#[tokio::test]
async fn repeated_queries_are_bit_identical() {
    let d = disambiguator();
    let first = d
        .disambiguate("I went to the bank to deposit money.", "bank")
        .await
        .unwrap();
    let second = d
        .disambiguate("I went to the bank to deposit money.", "bank")
        .await
        .unwrap();

    assert_eq!(first.ranked.len(), second.ranked.len());
    for (a, b) in first.ranked.iter().zip(&second.ranked) {
        assert_eq!(a.sense.key, b.sense.key);
        assert_eq!(a.fused.to_bits(), b.fused.to_bits());
        assert_eq!(a.rank, b.rank);
    }
}

#[tokio::test]
async fn word_lookup_ignores_case_and_whitespace() {
    let d = disambiguator();
    let out = d
        .disambiguate("I went to the bank to deposit money.", "  BANK ")
        .await
        .unwrap();
    assert_eq!(out.word, "bank");
    assert!(out.best.is_some());
}

#[tokio::test]
async fn unknown_words_come_back_empty() {
    let d = disambiguator();
    let out = d
        .disambiguate("some perfectly normal sentence", "zyzzyva")
        .await
        .unwrap();
    assert!(out.best.is_none());
    assert!(out.ranked.is_empty());
}
