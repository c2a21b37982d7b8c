//! Feature extraction: text → initial positive/negative memberships in [0,1].
//!
//! Memberships reward both absolute cue density (`score * 0.15`) and the polarity's
//! share of all matched cues (`0.2 * score / total`), capped at 1.0. Text without any
//! cue gets the fixed low-ambiguity pair `(0.1, 0.1)`.

use serde::Serialize;
use std::sync::Arc;

use crate::decision::AnalysisResult;
use crate::engine;
use crate::lexicon::{default_lexicon, Lexicon};

/// Membership assigned to both polarities when no cue matched.
pub const NO_CUE_MEMBERSHIP: f64 = 0.1;
const DENSITY_WEIGHT: f64 = 0.15;
const DOMINANCE_WEIGHT: f64 = 0.2;

/// Initial memberships, before interference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureResult {
    pub initial_pos: f64,
    pub initial_neg: f64,
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Analyzer over the built-in lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(default_lexicon())
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn features(&self, text: &str) -> FeatureResult {
        let (pos_score, neg_score) = self.lexicon.cue_counts(text);
        let total = pos_score + neg_score;

        if total == 0 {
            return FeatureResult {
                initial_pos: NO_CUE_MEMBERSHIP,
                initial_neg: NO_CUE_MEMBERSHIP,
            };
        }

        FeatureResult {
            initial_pos: membership(pos_score, total),
            initial_neg: membership(neg_score, total),
        }
    }

    /// Full pipeline: features → interference → trigger.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        engine::resolve(self.features(text))
    }
}

#[inline]
fn membership(score: usize, total: usize) -> f64 {
    let score = score as f64;
    let total = total as f64;
    (score * DENSITY_WEIGHT + DOMINANCE_WEIGHT * (score / total)).min(1.0)
}
