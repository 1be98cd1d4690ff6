//! Weighted draw over the seven outcomes.

use super::rng::RandomSource;
use super::weights::OutcomeWeights;
use crate::models::BallOutcome;

/// Clamps negative weights and guarantees a defined distribution: an
/// all-zero record becomes a certain dot ball.
pub fn normalize(weights: OutcomeWeights) -> OutcomeWeights {
    let weights = weights.clamp_non_negative();
    if weights.total() <= 0.0 {
        return OutcomeWeights::zero().add(BallOutcome::Dot, 1.0);
    }
    weights
}

/// Cumulative subtraction of a uniform draw in `[0, total)`, walking
/// outcomes in `BallOutcome::ALL` order. Zero-weight outcomes are never chosen.
pub fn sample_outcome(weights: OutcomeWeights, rng: &mut impl RandomSource) -> BallOutcome {
    let weights = normalize(weights);
    let mut remaining = rng.next_unit() * weights.total();
    let mut last_positive = BallOutcome::Dot;

    for (outcome, weight) in weights.iter() {
        if weight <= 0.0 {
            continue;
        }
        last_positive = outcome;
        remaining -= weight;
        if remaining <= 0.0 {
            return outcome;
        }
    }
    // Floating-point residue past the final bucket.
    last_positive
}
