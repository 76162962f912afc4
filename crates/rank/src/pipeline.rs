//! End-to-end disambiguation pipeline.

use crate::fusion::{fuse, rank_order, FusionConfig};
use crate::knowledge::knowledge_overlap;
use crate::{RankError, Result};
use sense_lexicon::{LexicalResource, SenseCandidate};
use sense_neural::RelevanceScorer;
use serde::Serialize;
use std::sync::Arc;

/// One candidate sense with every score the pipeline produced for it.
#[derive(Clone, Debug, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub sense: SenseCandidate,
    /// Distinct-token overlap between sentence and enriched gloss.
    pub knowledge: u32,
    /// Neural relevance probability in `[0, 1]`.
    pub neural: f32,
    /// Weighted blend the final ranking is sorted by.
    pub fused: f32,
    /// 1-based position after fusion.
    pub rank: usize,
}

/// Ranked outcome for one (sentence, word) query.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Disambiguation {
    pub word: String,
    pub best: Option<ScoredCandidate>,
    pub ranked: Vec<ScoredCandidate>,
}

impl Disambiguation {
    fn empty(word: &str) -> Self {
        Self {
            word: word.trim().to_lowercase(),
            best: None,
            ranked: Vec::new(),
        }
    }
}

/// Hybrid disambiguator over a lexical resource and a relevance scorer.
pub struct Disambiguator {
    resource: Arc<dyn LexicalResource>,
    scorer: Arc<dyn RelevanceScorer>,
    config: FusionConfig,
}

impl Disambiguator {
    pub fn new(resource: Arc<dyn LexicalResource>, scorer: Arc<dyn RelevanceScorer>) -> Self {
        Self::with_config(resource, scorer, FusionConfig::default())
    }

    pub fn with_config(
        resource: Arc<dyn LexicalResource>,
        scorer: Arc<dyn RelevanceScorer>,
        config: FusionConfig,
    ) -> Self {
        Self {
            resource,
            scorer,
            config,
        }
    }

    /// Rank the senses of `word` against `sentence`.
    ///
    /// An empty sentence, an empty word, or a word with no known senses all
    /// produce an empty outcome rather than an error; the neural pass is
    /// skipped entirely in those cases.
    pub async fn disambiguate(&self, sentence: &str, word: &str) -> Result<Disambiguation> {
        let word_trimmed = word.trim();
        if sentence.trim().is_empty() || word_trimmed.is_empty() {
            return Ok(Disambiguation::empty(word));
        }

        let candidates = self.resource.senses(word_trimmed);
        if candidates.is_empty() {
            log::debug!("No senses known for '{word_trimmed}'");
            return Ok(Disambiguation::empty(word));
        }

        let shortlist = self.shortlist(sentence, candidates);
        let glosses: Vec<String> = shortlist
            .iter()
            .map(|(sense, _)| sense.definition.clone())
            .collect();
        let neural = self.scorer.relevance_batch(sentence, &glosses).await?;
        if neural.len() != shortlist.len() {
            return Err(RankError::ScoreCountMismatch {
                expected: shortlist.len(),
                actual: neural.len(),
            });
        }

        let knowledge: Vec<u32> = shortlist.iter().map(|(_, kb)| *kb).collect();
        let fused = fuse(&knowledge, &neural, self.config.alpha);

        let mut ranked: Vec<ScoredCandidate> = rank_order(&fused)
            .into_iter()
            .map(|idx| ScoredCandidate {
                sense: shortlist[idx].0.clone(),
                knowledge: knowledge[idx],
                neural: neural[idx],
                fused: fused[idx],
                rank: 0,
            })
            .collect();
        for (position, candidate) in ranked.iter_mut().enumerate() {
            candidate.rank = position + 1;
        }

        if let Some(best) = ranked.first() {
            log::debug!(
                "Best sense for '{word_trimmed}': {} (fused {:.3})",
                best.sense.key,
                best.fused
            );
        }

        Ok(Disambiguation {
            word: word_trimmed.to_lowercase(),
            best: ranked.first().cloned(),
            ranked,
        })
    }

    /// Knowledge pass: score every candidate, keep the `top_k` best.
    ///
    /// The sort is stable, so candidates with equal overlap keep their
    /// lexicon declaration order.
    fn shortlist(&self, sentence: &str, candidates: Vec<SenseCandidate>) -> Vec<(SenseCandidate, u32)> {
        let mut scored: Vec<(SenseCandidate, u32)> = candidates
            .into_iter()
            .map(|sense| {
                let kb = knowledge_overlap(sentence, &sense);
                (sense, kb)
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(self.config.top_k);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use sense_neural::{NeuralError, Result as NeuralResult};

    struct FixedResource(Vec<SenseCandidate>);

    impl LexicalResource for FixedResource {
        fn senses(&self, _word: &str) -> Vec<SenseCandidate> {
            self.0.clone()
        }
    }

    /// Scores glosses by a fixed keyword so tests control the neural signal.
    struct KeywordScorer {
        keyword: &'static str,
    }

    #[async_trait]
    impl RelevanceScorer for KeywordScorer {
        async fn relevance_batch(
            &self,
            _sentence: &str,
            glosses: &[String],
        ) -> NeuralResult<Vec<f32>> {
            Ok(glosses
                .iter()
                .map(|g| if g.contains(self.keyword) { 0.9 } else { 0.1 })
                .collect())
        }
    }

    struct FailingScorer;

    #[async_trait]
    impl RelevanceScorer for FailingScorer {
        async fn relevance_batch(
            &self,
            _sentence: &str,
            _glosses: &[String],
        ) -> NeuralResult<Vec<f32>> {
            Err(NeuralError::Inference("boom".to_string()))
        }
    }

    fn sense(key: &str, definition: &str) -> SenseCandidate {
        SenseCandidate {
            key: key.to_string(),
            definition: definition.to_string(),
            examples: Vec::new(),
            hypernyms: Vec::new(),
        }
    }

    fn disambiguator(senses: Vec<SenseCandidate>, keyword: &'static str) -> Disambiguator {
        Disambiguator::new(
            Arc::new(FixedResource(senses)),
            Arc::new(KeywordScorer { keyword }),
        )
    }

    #[tokio::test]
    async fn ranks_the_matching_sense_first() {
        let d = disambiguator(
            vec![
                sense("bank.n.01", "sloping land beside a river"),
                sense("bank.n.02", "a financial institution that accepts deposits"),
            ],
            "financial",
        );
        let out = d
            .disambiguate("I went to the bank to deposit money", "bank")
            .await
            .unwrap();
        let best = out.best.expect("best sense");
        assert_eq!(best.sense.key, "bank.n.02");
        assert_eq!(best.rank, 1);
        assert_eq!(out.ranked.len(), 2);
        assert!(out.ranked[0].fused >= out.ranked[1].fused);
    }

    #[tokio::test]
    async fn empty_inputs_short_circuit() {
        let d = disambiguator(vec![sense("a.n.01", "anything")], "anything");
        assert!(d.disambiguate("", "bank").await.unwrap().best.is_none());
        assert!(d.disambiguate("a sentence", "  ").await.unwrap().best.is_none());
    }

    #[tokio::test]
    async fn unknown_word_yields_empty_outcome() {
        let d = Disambiguator::new(
            Arc::new(FixedResource(Vec::new())),
            // A failing scorer proves the neural pass is skipped.
            Arc::new(FailingScorer),
        );
        let out = d.disambiguate("some sentence", "zyzzyva").await.unwrap();
        assert!(out.best.is_none());
        assert!(out.ranked.is_empty());
    }

    #[tokio::test]
    async fn shortlist_is_capped_at_top_k() {
        let senses: Vec<SenseCandidate> = (0..10)
            .map(|i| sense(&format!("w.n.{i:02}"), &format!("definition {i}")))
            .collect();
        let d = disambiguator(senses, "definition");
        let out = d.disambiguate("a definition heavy sentence", "w").await.unwrap();
        assert_eq!(out.ranked.len(), 6);
    }

    #[tokio::test]
    async fn ranks_are_contiguous_from_one() {
        let d = disambiguator(
            vec![
                sense("x.n.01", "alpha"),
                sense("x.n.02", "beta"),
                sense("x.n.03", "gamma"),
            ],
            "beta",
        );
        let out = d.disambiguate("unrelated sentence", "x").await.unwrap();
        let ranks: Vec<usize> = out.ranked.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn scorer_errors_propagate() {
        let d = Disambiguator::new(
            Arc::new(FixedResource(vec![sense("a.n.01", "anything")])),
            Arc::new(FailingScorer),
        );
        assert!(d.disambiguate("a sentence", "a").await.is_err());
    }

    #[tokio::test]
    async fn output_is_deterministic() {
        let d = disambiguator(
            vec![
                sense("bank.n.01", "sloping land beside a river"),
                sense("bank.n.02", "a financial institution"),
            ],
            "financial",
        );
        let first = d.disambiguate("money at the bank", "bank").await.unwrap();
        let second = d.disambiguate("money at the bank", "bank").await.unwrap();
        let keys =
            |o: &Disambiguation| o.ranked.iter().map(|c| c.sense.key.clone()).collect::<Vec<_>>();
        assert_eq!(keys(&first), keys(&second));
        for (a, b) in first.ranked.iter().zip(&second.ranked) {
            assert_eq!(a.fused.to_bits(), b.fused.to_bits());
        }
    }
}
