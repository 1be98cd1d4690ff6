//! Fixed-size outcome weight record and the base weights per action.

use std::ops::{Index, IndexMut};

use super::config::WeightConfig;
use super::rng::RandomSource;
use crate::models::{BallOutcome, RiskAction};

/// One weight per [`BallOutcome`], indexed by the enum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutcomeWeights([f64; BallOutcome::COUNT]);

impl OutcomeWeights {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn add(mut self, outcome: BallOutcome, delta: f64) -> Self {
        self[outcome] += delta;
        self
    }

    pub fn scale(mut self, outcome: BallOutcome, factor: f64) -> Self {
        self[outcome] *= factor;
        self
    }

    /// Zeroes every outcome the action cannot produce.
    pub fn enforce_mode(mut self, action: RiskAction) -> Self {
        for outcome in BallOutcome::ALL {
            if !outcome.is_feasible(action) {
                self[outcome] = 0.0;
            }
        }
        self
    }

    pub fn clamp_non_negative(mut self) -> Self {
        for w in self.0.iter_mut() {
            if *w < 0.0 || w.is_nan() {
                *w = 0.0;
            }
        }
        self
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BallOutcome, f64)> + '_ {
        BallOutcome::ALL.into_iter().map(move |o| (o, self[o]))
    }
}

impl Index<BallOutcome> for OutcomeWeights {
    type Output = f64;

    fn index(&self, outcome: BallOutcome) -> &f64 {
        &self.0[outcome.index()]
    }
}

impl IndexMut<BallOutcome> for OutcomeWeights {
    fn index_mut(&mut self, outcome: BallOutcome) -> &mut f64 {
        &mut self.0[outcome.index()]
    }
}

/// Jittered base weights. Each feasible outcome draws its own jitter, in
/// outcome order; infeasible outcomes stay at zero.
pub fn base_weights(
    action: RiskAction,
    config: &WeightConfig,
    rng: &mut impl RandomSource,
) -> OutcomeWeights {
    let (outcomes, base) = match action {
        RiskAction::Safe => (
            [BallOutcome::Dot, BallOutcome::One, BallOutcome::Two, BallOutcome::Three],
            config.safe,
        ),
        RiskAction::Hard => (
            [BallOutcome::Dot, BallOutcome::Four, BallOutcome::Six, BallOutcome::Wicket],
            config.hard,
        ),
    };

    let mut weights = OutcomeWeights::zero();
    for (outcome, weight) in outcomes.into_iter().zip(base) {
        weights[outcome] = weight * rng.jitter(config.jitter_low, config.jitter_high);
    }
    weights
}
