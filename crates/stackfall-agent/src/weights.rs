//! Feature weights: the named, externally configurable parameter set that
//! reduces [`StackMetrics`](crate::metrics::StackMetrics) to a scalar score.

use serde::{Deserialize, Serialize};

use crate::metrics::StackMetrics;

/// Weights for the linear combination of stack features.
///
/// `score = w_height·aggregate_height + w_lines·complete_lines
///        + w_holes·holes + w_bumpiness·bumpiness`
///
/// Higher scores are better, so the penalized features carry negative
/// weights. The defaults are hand-tuned rather than learned.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureWeights {
    pub height: f32,
    pub complete_lines: f32,
    pub holes: f32,
    pub bumpiness: f32,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            height: -0.58,
            complete_lines: 0.76,
            holes: -0.36,
            bumpiness: -0.15,
        }
    }
}

impl FeatureWeights {
    /// Combines the features of one candidate into a heuristic score.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn score(&self, metrics: &StackMetrics) -> f32 {
        self.height * metrics.aggregate_height as f32
            + self.complete_lines * metrics.complete_lines as f32
            + self.holes * metrics.holes as f32
            + self.bumpiness * metrics.bumpiness as f32
    }
}
