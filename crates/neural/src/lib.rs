//! Neural gloss-relevance scoring.
//!
//! A [`RelevanceScorer`] takes one sentence and a batch of candidate sense
//! glosses and returns one probability per gloss that the gloss describes the
//! word as used in that sentence. The production backend runs a BERT-style
//! cross-encoder through ONNX Runtime; a deterministic stub backend exists for
//! tests and for environments without model files.

mod ort_backend;
mod stub;

pub use ort_backend::OrtScorer;
pub use stub::StubScorer;

use async_trait::async_trait;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(thiserror::Error, Debug)]
pub enum NeuralError {
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Unsupported scorer mode '{0}' (expected 'onnx' or 'stub')")]
    UnsupportedMode(String),
}

pub type Result<T> = std::result::Result<T, NeuralError>;

/// Scores how well each gloss explains the sentence's use of the target word.
///
/// Implementations return one value in `[0, 1]` per gloss, in input order, and
/// must be deterministic for a fixed (sentence, glosses) pair.
#[async_trait]
pub trait RelevanceScorer: Send + Sync {
    async fn relevance_batch(&self, sentence: &str, glosses: &[String]) -> Result<Vec<f32>>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ScorerMode {
    Onnx,
    Stub,
}

impl ScorerMode {
    fn from_env() -> Result<Self> {
        let raw = env::var("SENSE_NEURAL_MODE").unwrap_or_else(|_| "stub".to_string());
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "onnx" => Ok(Self::Onnx),
            "stub" => Ok(Self::Stub),
            other => Err(NeuralError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Directory holding `model.onnx` and `tokenizer.json`.
///
/// `SENSE_MODEL_DIR` wins; otherwise search for a `models/` directory upwards
/// from the executable and then from the current directory.
pub fn model_dir() -> PathBuf {
    if let Ok(path) = env::var("SENSE_MODEL_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(exe) = env::current_exe() {
        if let Some(mut dir) = exe.parent().map(std::path::Path::to_path_buf) {
            loop {
                let candidate = dir.join("models");
                if candidate.join("model.onnx").exists() {
                    return candidate;
                }
                if !dir.pop() {
                    break;
                }
            }
        }
    }

    if let Ok(mut dir) = env::current_dir() {
        loop {
            let candidate = dir.join("models");
            if candidate.join("model.onnx").exists() {
                return candidate;
            }
            if !dir.pop() {
                break;
            }
        }
    }

    PathBuf::from("models")
}

/// Build the scorer selected by `SENSE_NEURAL_MODE` (default: stub).
pub fn scorer_from_env() -> Result<Arc<dyn RelevanceScorer>> {
    match ScorerMode::from_env()? {
        ScorerMode::Onnx => Ok(Arc::new(OrtScorer::load(&model_dir())?)),
        ScorerMode::Stub => Ok(Arc::new(StubScorer::new())),
    }
}

pub(crate) fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
