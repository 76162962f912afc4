//! ONNX Runtime backend for the gloss-relevance cross-encoder.
//!
//! The model is a BERT-style sequence-pair classifier: each (sentence, gloss)
//! pair is tokenized together and the final logit is squashed through a
//! sigmoid into a relevance probability.

use crate::{sigmoid, NeuralError, RelevanceScorer, Result};
use async_trait::async_trait;
use ndarray::{Array, Ix1, Ix2};
use ort::execution_providers::CPUExecutionProvider;
use ort::session::{builder::GraphOptimizationLevel, Session, SessionInputs};
use ort::value::{DynTensor, Tensor};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokenizers::{Encoding, PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};
use tokio::task::spawn_blocking;

/// Token budget of the sequence-pair encoder.
const MAX_LENGTH: usize = 128;

/// Pairs per forward pass. Larger batches only add latency for this model
/// size; candidate lists are short anyway.
const MAX_BATCH: usize = 32;

struct Backend {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

/// Relevance scorer backed by an ONNX cross-encoder session.
pub struct OrtScorer {
    backend: Arc<Backend>,
}

impl OrtScorer {
    /// Load `model.onnx` and `tokenizer.json` from `model_dir`.
    pub fn load(model_dir: &Path) -> Result<Self> {
        if !tokenizers::utils::parallelism::is_parallelism_configured() {
            tokenizers::utils::parallelism::set_parallelism(false);
        }

        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");
        if !model_path.exists() || !tokenizer_path.exists() {
            return Err(NeuralError::ModelLoad(format!(
                "Model files are missing. Expected ONNX at {} and tokenizer at {} (set SENSE_MODEL_DIR to override).",
                model_path.display(),
                tokenizer_path.display(),
            )));
        }

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| NeuralError::ModelLoad(format!("Tokenizer load failed: {e}")))?;
        tokenizer.with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::BatchLongest,
            ..PaddingParams::default()
        }));
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_LENGTH,
                ..TruncationParams::default()
            }))
            .map_err(|e| NeuralError::ModelLoad(format!("Tokenizer truncation failed: {e}")))?;

        let intra_threads = default_intra_threads();
        let session = Session::builder()
            .map_err(|e| NeuralError::ModelLoad(format!("{e}")))?
            .with_intra_threads(intra_threads)
            .map_err(|e| NeuralError::ModelLoad(format!("Failed to set ORT intra threads: {e}")))?
            .with_intra_op_spinning(false)
            .map_err(|e| NeuralError::ModelLoad(format!("Failed to set ORT spinning: {e}")))?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .map_err(|e| {
                NeuralError::ModelLoad(format!("Failed to register execution provider: {e}"))
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| NeuralError::ModelLoad(format!("Failed to set optimization level: {e}")))?
            .commit_from_file(&model_path)
            .map_err(|e| NeuralError::ModelLoad(format!("Failed to load ONNX model: {e}")))?;

        log::info!(
            "Loaded relevance model from {} (max_length {MAX_LENGTH})",
            model_path.display()
        );

        Ok(Self {
            backend: Arc::new(Backend {
                session: Mutex::new(session),
                tokenizer,
            }),
        })
    }
}

#[async_trait]
impl RelevanceScorer for OrtScorer {
    async fn relevance_batch(&self, sentence: &str, glosses: &[String]) -> Result<Vec<f32>> {
        if glosses.is_empty() {
            return Ok(Vec::new());
        }
        let backend = self.backend.clone();
        let sentence = sentence.to_string();
        let glosses = glosses.to_vec();
        spawn_blocking(move || backend.score_blocking(&sentence, &glosses))
            .await
            .map_err(|e| NeuralError::Inference(format!("Join error: {e}")))?
    }
}

impl Backend {
    fn score_blocking(&self, sentence: &str, glosses: &[String]) -> Result<Vec<f32>> {
        let mut scores = Vec::with_capacity(glosses.len());
        for batch in glosses.chunks(MAX_BATCH) {
            let pairs: Vec<(String, String)> = batch
                .iter()
                .map(|gloss| (sentence.to_string(), gloss.clone()))
                .collect();
            let encodings = self
                .tokenizer
                .encode_batch(pairs, true)
                .map_err(|e| NeuralError::Tokenization(format!("{e}")))?;
            if encodings.is_empty() {
                continue;
            }

            let seq_len = encodings[0].len();
            if encodings.iter().any(|e| e.len() != seq_len) {
                return Err(NeuralError::Tokenization(
                    "Inconsistent sequence lengths after padding".to_string(),
                ));
            }

            let (ids, masks, type_ids) = flatten_encodings(&encodings, seq_len);
            let logits = self.run(batch.len(), seq_len, ids, masks, type_ids)?;
            scores.extend(logits.into_iter().map(sigmoid));
        }
        Ok(scores)
    }

    fn run(
        &self,
        rows: usize,
        seq_len: usize,
        ids: Vec<i64>,
        masks: Vec<i64>,
        type_ids: Vec<i64>,
    ) -> Result<Vec<f32>> {
        let ids_array = Array::from_shape_vec((rows, seq_len), ids)
            .map_err(|e| NeuralError::Inference(format!("IDs shape error: {e}")))?;
        let mask_array = Array::from_shape_vec((rows, seq_len), masks)
            .map_err(|e| NeuralError::Inference(format!("Mask shape error: {e}")))?;
        let type_array = Array::from_shape_vec((rows, seq_len), type_ids)
            .map_err(|e| NeuralError::Inference(format!("Types shape error: {e}")))?;

        let mut available: HashMap<String, DynTensor> = HashMap::new();
        available.insert(
            "input_ids".to_string(),
            Tensor::from_array(ids_array.into_dyn())
                .map_err(|e| NeuralError::Inference(format!("{e}")))?
                .upcast(),
        );
        available.insert(
            "attention_mask".to_string(),
            Tensor::from_array(mask_array.into_dyn())
                .map_err(|e| NeuralError::Inference(format!("{e}")))?
                .upcast(),
        );
        available.insert(
            "token_type_ids".to_string(),
            Tensor::from_array(type_array.into_dyn())
                .map_err(|e| NeuralError::Inference(format!("{e}")))?
                .upcast(),
        );

        let mut session = self
            .session
            .lock()
            .map_err(|_| NeuralError::Inference("Failed to lock ONNX session".into()))?;

        let mut feed: HashMap<String, DynTensor> = HashMap::new();
        for input in &session.inputs {
            let key = input.name.clone();
            let Some(value) = available.get(&key) else {
                return Err(NeuralError::Inference(format!(
                    "Unsupported ONNX input '{key}'"
                )));
            };
            feed.insert(key, value.clone());
        }

        let outputs = session
            .run(SessionInputs::from(feed))
            .map_err(|e| NeuralError::Inference(format!("ONNX forward failed: {e}")))?;
        if outputs.len() == 0 {
            return Err(NeuralError::Inference("ONNX returned no outputs".to_string()));
        }

        let array = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| NeuralError::Inference(format!("Failed to decode ONNX output: {e}")))?
            .to_owned();

        logits_from_output(array, rows)
    }
}

/// Reduce the classifier head output to one logit per row.
///
/// Accepts `[batch, 1]` (single-logit head), `[batch, 2]` (two-class head,
/// positive-minus-negative logit) and `[batch]` shapes.
fn logits_from_output(array: ndarray::ArrayD<f32>, rows: usize) -> Result<Vec<f32>> {
    let logits: Vec<f32> = match array.ndim() {
        1 => {
            let flat = array
                .into_dimensionality::<Ix1>()
                .map_err(|e| NeuralError::Inference(format!("Bad output shape: {e}")))?;
            flat.to_vec()
        }
        2 => {
            let matrix = array
                .into_dimensionality::<Ix2>()
                .map_err(|e| NeuralError::Inference(format!("Bad output shape: {e}")))?;
            match matrix.ncols() {
                1 => matrix.column(0).to_vec(),
                2 => matrix
                    .outer_iter()
                    .map(|row| row[1] - row[0])
                    .collect(),
                other => {
                    return Err(NeuralError::Inference(format!(
                        "Unexpected classifier width {other} (expected 1 or 2)"
                    )));
                }
            }
        }
        _ => {
            return Err(NeuralError::Inference(format!(
                "Unexpected ONNX output dims: {:?}",
                array.shape()
            )));
        }
    };

    if logits.len() != rows {
        return Err(NeuralError::Inference(format!(
            "Expected {rows} logits, got {}",
            logits.len()
        )));
    }
    Ok(logits)
}

fn flatten_encodings(
    encodings: &[Encoding],
    seq_len: usize,
) -> (Vec<i64>, Vec<i64>, Vec<i64>) {
    let mut ids = Vec::with_capacity(encodings.len() * seq_len);
    let mut masks = Vec::with_capacity(encodings.len() * seq_len);
    let mut type_ids = Vec::with_capacity(encodings.len() * seq_len);

    for encoding in encodings {
        let encoding_ids = encoding.get_ids();
        let encoding_masks = encoding.get_attention_mask();
        let encoding_types = encoding.get_type_ids();
        for idx in 0..seq_len {
            ids.push(i64::from(*encoding_ids.get(idx).unwrap_or(&0)));
            masks.push(i64::from(*encoding_masks.get(idx).unwrap_or(&0)));
            type_ids.push(i64::from(*encoding_types.get(idx).unwrap_or(&0)));
        }
    }

    (ids, masks, type_ids)
}

fn default_intra_threads() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    if cpus <= 4 {
        1
    } else if cpus <= 12 {
        2
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_logit_head_is_passed_through() {
        let array = Array::from_shape_vec((3, 1), vec![-1.0, 0.0, 2.5])
            .unwrap()
            .into_dyn();
        let logits = logits_from_output(array, 3).unwrap();
        assert_eq!(logits, vec![-1.0, 0.0, 2.5]);
    }

    #[test]
    fn two_class_head_becomes_logit_difference() {
        let array = Array::from_shape_vec((2, 2), vec![0.0, 1.0, 2.0, -1.0])
            .unwrap()
            .into_dyn();
        let logits = logits_from_output(array, 2).unwrap();
        assert_eq!(logits, vec![1.0, -3.0]);
    }

    #[test]
    fn flat_output_is_accepted() {
        let array = Array::from_vec(vec![0.5, -0.5]).into_dyn();
        let logits = logits_from_output(array, 2).unwrap();
        assert_eq!(logits, vec![0.5, -0.5]);
    }

    #[test]
    fn row_count_mismatch_is_an_error() {
        let array = Array::from_vec(vec![0.5]).into_dyn();
        assert!(logits_from_output(array, 2).is_err());
    }

    #[test]
    fn wide_classifier_heads_are_rejected() {
        let array = Array::from_shape_vec((1, 3), vec![0.1, 0.2, 0.3])
            .unwrap()
            .into_dyn();
        assert!(logits_from_output(array, 1).is_err());
    }
}
