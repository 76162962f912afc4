//! Deterministic stand-in scorer for tests and model-less environments.

use crate::{RelevanceScorer, Result};
use async_trait::async_trait;

/// Hash-derived pseudo-relevance in `(0, 1)`.
///
/// Useful where real model files are unavailable: output is stable across
/// runs and platforms for a fixed (sentence, gloss) pair, so ranking stays
/// reproducible even though the scores carry no semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubScorer;

impl StubScorer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn score(sentence: &str, gloss: &str) -> f32 {
        let mut state = fnv1a_64(sentence.as_bytes()) ^ fnv1a_64(gloss.as_bytes()).rotate_left(17);
        let bits = splitmix64(&mut state);
        let high = (bits >> 32) as u32;
        let mantissa = high >> 9;
        // Map the top mantissa bits onto [1.0, 2.0) and shift down to [0, 1).
        f32::from_bits(0x3f80_0000 | mantissa) - 1.0
    }
}

#[async_trait]
impl RelevanceScorer for StubScorer {
    async fn relevance_batch(&self, sentence: &str, glosses: &[String]) -> Result<Vec<f32>> {
        Ok(glosses
            .iter()
            .map(|gloss| Self::score(sentence, gloss))
            .collect())
    }
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn scores_are_deterministic() {
        let scorer = StubScorer::new();
        let glosses = vec![
            "a financial institution".to_string(),
            "sloping land beside water".to_string(),
        ];
        let first = scorer
            .relevance_batch("I went to the bank", &glosses)
            .await
            .unwrap();
        let second = scorer
            .relevance_batch("I went to the bank", &glosses)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn scores_stay_in_unit_interval() {
        let scorer = StubScorer::new();
        let glosses: Vec<String> = (0..64).map(|i| format!("gloss number {i}")).collect();
        let scores = scorer.relevance_batch("any sentence", &glosses).await.unwrap();
        assert_eq!(scores.len(), glosses.len());
        for score in scores {
            assert!((0.0..1.0).contains(&score), "score {score} out of range");
        }
    }

    #[tokio::test]
    async fn different_glosses_usually_differ() {
        let scorer = StubScorer::new();
        let glosses = vec!["alpha".to_string(), "beta".to_string()];
        let scores = scorer.relevance_batch("sentence", &glosses).await.unwrap();
        assert_ne!(scores[0], scores[1]);
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_result() {
        let scorer = StubScorer::new();
        let scores = scorer.relevance_batch("sentence", &[]).await.unwrap();
        assert!(scores.is_empty());
    }
}
