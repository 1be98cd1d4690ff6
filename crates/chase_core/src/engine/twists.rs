//! Post-sampling "drama" overrides. At most one fires per ball.

use super::commentary;
use super::config::TwistConfig;
use super::rng::RandomSource;
use crate::models::{BallDetail, BallOutcome, RiskAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Twist {
    pub outcome: BallOutcome,
    pub detail: BallDetail,
    pub commentary: &'static str,
}

/// Checks the edge, stunner and review rules in that order. Each rule rolls
/// only when the sampled outcome matches its trigger, and the first rule
/// that fires ends the chain.
pub fn apply_twist(
    outcome: BallOutcome,
    action: RiskAction,
    config: &TwistConfig,
    rng: &mut impl RandomSource,
) -> Option<Twist> {
    match outcome {
        BallOutcome::Dot if action == RiskAction::Hard && rng.chance(config.edge_chance) => Some(Twist {
            outcome: BallOutcome::Four,
            detail: BallDetail::Edge,
            commentary: commentary::LUCKY_EDGE,
        }),
        BallOutcome::Six if rng.chance(config.stunner_chance) => Some(Twist {
            outcome: BallOutcome::Wicket,
            detail: BallDetail::Stunner,
            commentary: commentary::BOUNDARY_STUNNER,
        }),
        BallOutcome::Wicket if rng.chance(config.drs_chance) => Some(Twist {
            outcome: BallOutcome::Dot,
            detail: BallDetail::Drs,
            commentary: commentary::DRS_OVERTURNED,
        }),
        _ => None,
    }
}
