//! # Sentiment Resolver
//! Pure, testable logic that maps initial memberships → `AnalysisResult`.
//! No I/O, suitable for unit tests and offline evaluation.
//!
//! Policy: the conflict term `pos * neg` scales a signed interference that widens
//! the gap between the two memberships. The clamped results are then classified
//! BUY/SELL on a strong one-sided reading, HOLD on high conflict, NEUTRAL otherwise.

use crate::decision::{AnalysisResult, Trigger, TriggerType};
use crate::sentiment::FeatureResult;

/// Coherence factor K of the interference term.
pub const COHERENCE_FACTOR: f64 = 0.4;
/// A polarity must exceed this to fire BUY/SELL...
pub const DOMINANT_THRESHOLD: f64 = 0.7;
/// ...while the opposite polarity stays below this.
pub const OPPOSING_CEILING: f64 = 0.35;
/// Pre-interference conflict above this yields HOLD.
pub const CONFLICT_THRESHOLD: f64 = 0.20;

/// Apply interference and classify.
pub fn resolve(features: FeatureResult) -> AnalysisResult {
    let miu_pos = features.initial_pos;
    let miu_neg = features.initial_neg;

    let conflict = miu_pos * miu_neg;
    let interference = COHERENCE_FACTOR * conflict * (miu_pos - miu_neg);

    // Independent clamps, no renormalization.
    let final_pos = (miu_pos + interference).clamp(0.0, 1.0);
    let final_neg = (miu_neg - interference).clamp(0.0, 1.0);

    AnalysisResult {
        positive_membership: final_pos,
        negative_membership: final_neg,
        trigger: classify(final_pos, final_neg, conflict),
    }
}

/// First match wins: BUY, SELL, HOLD, NEUTRAL.
/// `conflict` is the pre-interference product and is reported as HOLD strength.
pub fn classify(final_pos: f64, final_neg: f64, conflict: f64) -> Trigger {
    if final_pos > DOMINANT_THRESHOLD && final_neg < OPPOSING_CEILING {
        Trigger::new(TriggerType::BuyOptimism, final_pos)
    } else if final_neg > DOMINANT_THRESHOLD && final_pos < OPPOSING_CEILING {
        Trigger::new(TriggerType::SellCaution, final_neg)
    } else if conflict > CONFLICT_THRESHOLD {
        Trigger::new(TriggerType::HoldAmbiguity, conflict)
    } else {
        Trigger::new(TriggerType::Neutral, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feats(p: f64, n: f64) -> FeatureResult {
        FeatureResult {
            initial_pos: p,
            initial_neg: n,
        }
    }

    #[test]
    fn no_conflict_means_no_interference() {
        let r = resolve(feats(0.65, 0.0));
        assert_eq!(r.positive_membership, 0.65);
        assert_eq!(r.negative_membership, 0.0);
        assert_eq!(r.trigger.kind, TriggerType::Neutral);
        assert_eq!(r.trigger.strength, 0.0);
    }

    #[test]
    fn interference_widens_the_gap() {
        // conflict 0.3, interference 0.4 * 0.3 * 0.1 = 0.012
        let r = resolve(feats(0.6, 0.5));
        assert!((r.positive_membership - 0.612).abs() < 1e-12);
        assert!((r.negative_membership - 0.488).abs() < 1e-12);
    }

    #[test]
    fn hold_strength_is_pre_interference_conflict() {
        let r = resolve(feats(0.6, 0.5));
        assert_eq!(r.trigger.kind, TriggerType::HoldAmbiguity);
        assert_eq!(r.trigger.strength, 0.6 * 0.5);
        assert_ne!(
            r.trigger.strength,
            r.positive_membership * r.negative_membership
        );
    }

    #[test]
    fn buy_wins_over_hold() {
        // conflict 0.35 > 0.20, but final (1.0, ~0.259) satisfies BUY first
        let r = resolve(feats(1.0, 0.35));
        assert_eq!(r.trigger.kind, TriggerType::BuyOptimism);
        assert_eq!(r.trigger.strength, 1.0);
        assert_eq!(r.positive_membership, 1.0);
        assert!(r.negative_membership < OPPOSING_CEILING);
    }

    #[test]
    fn sell_on_strong_negative() {
        let r = resolve(feats(0.0, 0.95));
        assert_eq!(r.trigger.kind, TriggerType::SellCaution);
        assert_eq!(r.trigger.strength, 0.95);
        assert_eq!(
            r.trigger.message,
            "BEARISH DECOHERENCE. Initiate hedge/sell protocol."
        );
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(classify(0.7, 0.0, 0.0).kind, TriggerType::Neutral);
        assert_eq!(classify(0.0, 0.7, 0.0).kind, TriggerType::Neutral);
        assert_eq!(classify(0.8, 0.35, 0.0).kind, TriggerType::Neutral);
        assert_eq!(classify(0.5, 0.5, 0.20).kind, TriggerType::Neutral);
        assert_eq!(classify(0.5, 0.5, 0.2000001).kind, TriggerType::HoldAmbiguity);
    }

    #[test]
    fn upper_clamp_applies() {
        let r = resolve(feats(1.0, 0.3));
        assert_eq!(r.positive_membership, 1.0);
        assert!(r.negative_membership >= 0.0 && r.negative_membership <= 1.0);
    }
}
