//! Score fusion: combine knowledge overlap and neural relevance.

/// Tuning knobs for the fusion stage.
#[derive(Clone, Copy, Debug)]
pub struct FusionConfig {
    /// Candidates forwarded to the neural pass, selected by knowledge score.
    pub top_k: usize,
    /// Weight of the neural score; the knowledge score gets `1 - alpha`.
    pub alpha: f32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            top_k: 6,
            alpha: 0.6,
        }
    }
}

/// Keeps the normalizer finite when every knowledge score is zero.
const KB_NORM_EPSILON: f32 = 1e-6;

/// Fuse per-candidate knowledge and neural scores into one score each.
///
/// Knowledge scores are normalized against the batch maximum so a sentence
/// with many gloss collisions does not drown out the neural signal. Both
/// inputs must be index-aligned.
pub fn fuse(knowledge: &[u32], neural: &[f32], alpha: f32) -> Vec<f32> {
    let max_kb = knowledge.iter().copied().max().unwrap_or(0) as f32;
    knowledge
        .iter()
        .zip(neural)
        .map(|(&kb, &nn)| {
            let norm_kb = kb as f32 / (max_kb + KB_NORM_EPSILON);
            alpha * nn + (1.0 - alpha) * norm_kb
        })
        .collect()
}

/// Candidate indices in descending fused-score order.
///
/// The sort is stable, so equal scores keep their knowledge-pass order.
pub(crate) fn rank_order(fused: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fused.len()).collect();
    order.sort_by(|&a, &b| {
        fused[b]
            .partial_cmp(&fused[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fused_score_blends_both_signals() {
        let fused = fuse(&[4, 2], &[0.5, 0.9], 0.6);
        // norm_kb ~ [1.0, 0.5]; fused ~ [0.6*0.5 + 0.4*1.0, 0.6*0.9 + 0.4*0.5]
        assert!((fused[0] - 0.7).abs() < 1e-3);
        assert!((fused[1] - 0.74).abs() < 1e-3);
    }

    #[test]
    fn all_zero_knowledge_degrades_to_neural_only() {
        let fused = fuse(&[0, 0, 0], &[0.2, 0.8, 0.5], 0.6);
        assert!((fused[0] - 0.12).abs() < 1e-6);
        assert!((fused[1] - 0.48).abs() < 1e-6);
        assert!((fused[2] - 0.30).abs() < 1e-6);
    }

    #[test]
    fn raising_neural_score_raises_fused_score() {
        let low = fuse(&[3], &[0.2], 0.6)[0];
        let high = fuse(&[3], &[0.9], 0.6)[0];
        assert!(high > low);
    }

    #[test]
    fn raising_knowledge_score_raises_fused_score() {
        let fused = fuse(&[1, 5], &[0.5, 0.5], 0.6);
        assert!(fused[1] > fused[0]);
    }

    #[test]
    fn rank_order_is_descending_and_stable() {
        assert_eq!(rank_order(&[0.1, 0.9, 0.5]), vec![1, 2, 0]);
        // Ties keep input order.
        assert_eq!(rank_order(&[0.5, 0.5, 0.9]), vec![2, 0, 1]);
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(fuse(&[], &[], 0.6).is_empty());
        assert!(rank_order(&[]).is_empty());
    }
}
