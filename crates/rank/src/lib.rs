//! Hybrid sense ranking.
//!
//! Two scoring passes over a word's candidate senses: a cheap knowledge
//! overlap between the sentence and each sense's enriched gloss, then a
//! neural relevance pass over the surviving top candidates. The two signals
//! are fused into a single score and the candidates re-ranked by it.

mod fusion;
mod knowledge;
mod pipeline;

pub use fusion::{fuse, FusionConfig};
pub use knowledge::{enriched_gloss, knowledge_overlap};
pub use pipeline::{Disambiguation, Disambiguator, ScoredCandidate};

use sense_neural::NeuralError;

#[derive(thiserror::Error, Debug)]
pub enum RankError {
    #[error("Relevance scoring failed: {0}")]
    Neural(#[from] NeuralError),

    #[error("Scorer returned {actual} scores for {expected} candidates")]
    ScoreCountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, RankError>;
