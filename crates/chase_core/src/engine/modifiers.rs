//! Contextual weight modifiers.
//!
//! Each rule is a pure step `OutcomeWeights -> OutcomeWeights`. They run in a
//! fixed order because the collapse guard scales the wicket weight that the
//! anti-spam and heat-check rules may already have raised.

use tracing::trace;

use super::commentary;
use super::config::ModifierConfig;
use super::context::BallContext;
use super::rng::RandomSource;
use super::weights::OutcomeWeights;
use crate::models::{BallOutcome, RiskAction};

/// Weights after the full pipeline plus any commentary a rule claimed.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifiedWeights {
    pub weights: OutcomeWeights,
    pub commentary: Option<String>,
}

/// Appends `action` to the window, dropping the oldest entries past `window`.
pub fn remember_action(recent: &[RiskAction], action: RiskAction, window: usize) -> Vec<RiskAction> {
    let mut history = recent.to_vec();
    history.push(action);
    if history.len() > window {
        let excess = history.len() - window;
        history.drain(..excess);
    }
    history
}

/// True when the last `streak` entries (current action included) all equal `action`.
pub fn is_spamming(history: &[RiskAction], action: RiskAction, streak: usize) -> bool {
    history.len() >= streak && history[history.len() - streak..].iter().all(|a| *a == action)
}

/// Punishes predictability half of the time. Only rolls when the batter is spamming.
pub fn anti_spam(
    weights: OutcomeWeights,
    history: &[RiskAction],
    action: RiskAction,
    bowler_name: &str,
    config: &ModifierConfig,
    rng: &mut impl RandomSource,
) -> (OutcomeWeights, Option<String>) {
    if !is_spamming(history, action, config.spam_streak) || !rng.chance(config.spam_penalty_chance) {
        return (weights, None);
    }
    match action {
        RiskAction::Hard => (
            weights.add(BallOutcome::Wicket, config.spam_hard_wicket_bonus),
            Some(commentary::predicted_slog(bowler_name)),
        ),
        RiskAction::Safe => (
            weights.add(BallOutcome::Dot, config.spam_safe_dot_bonus),
            Some(commentary::FIELD_TIGHTENS.to_string()),
        ),
    }
}

/// Going hard again right after a boundary invites trouble.
pub fn heat_check(weights: OutcomeWeights, ctx: &BallContext, config: &ModifierConfig) -> OutcomeWeights {
    if ctx.action != RiskAction::Hard || ctx.balls_since_boundary != config.heat_check_gap {
        return weights;
    }
    weights
        .add(BallOutcome::Wicket, config.heat_wicket_bonus)
        .add(BallOutcome::Dot, config.heat_dot_bonus)
        .add(BallOutcome::Six, -config.heat_six_penalty)
}

/// Keeps an early collapse from ending the chase too soon.
pub fn collapse_guard(weights: OutcomeWeights, ctx: &BallContext, config: &ModifierConfig) -> OutcomeWeights {
    let early_collapse =
        ctx.wickets >= config.collapse_min_wickets && ctx.overs_completed < config.collapse_max_overs;
    if !early_collapse || ctx.action != RiskAction::Hard {
        return weights;
    }
    weights
        .scale(BallOutcome::Wicket, config.collapse_wicket_scale)
        .add(BallOutcome::Dot, config.collapse_dot_bonus)
}

pub fn skill_gap(weights: OutcomeWeights, ctx: &BallContext, config: &ModifierConfig) -> OutcomeWeights {
    let threshold = config.skill_gap_threshold;
    match ctx.action {
        RiskAction::Hard if ctx.skill_diff > threshold => weights
            .add(BallOutcome::Four, config.skill_hard_boundary_bonus)
            .add(BallOutcome::Six, config.skill_hard_boundary_bonus),
        RiskAction::Hard if ctx.skill_diff < -threshold => weights
            .add(BallOutcome::Wicket, config.skill_hard_wicket_bonus)
            .add(BallOutcome::Dot, config.skill_hard_dot_bonus),
        RiskAction::Safe if ctx.skill_diff > threshold => weights
            .add(BallOutcome::One, config.skill_safe_one_bonus)
            .add(BallOutcome::Two, config.skill_safe_two_bonus),
        RiskAction::Safe if ctx.skill_diff < -threshold => {
            weights.add(BallOutcome::Dot, config.skill_safe_dot_bonus)
        }
        _ => weights,
    }
}

pub fn death_overs(weights: OutcomeWeights, ctx: &BallContext, config: &ModifierConfig) -> OutcomeWeights {
    if !ctx.is_death_phase || ctx.action != RiskAction::Hard {
        return weights;
    }
    weights
        .add(BallOutcome::Six, config.death_six_bonus)
        .add(BallOutcome::Wicket, config.death_wicket_bonus)
}

/// Runs every rule in order, then re-applies the action's outcome partition.
pub fn apply_modifiers(
    weights: OutcomeWeights,
    ctx: &BallContext,
    history: &[RiskAction],
    bowler_name: &str,
    config: &ModifierConfig,
    rng: &mut impl RandomSource,
) -> ModifiedWeights {
    let (weights, commentary) = anti_spam(weights, history, ctx.action, bowler_name, config, rng);
    let weights = heat_check(weights, ctx, config);
    let weights = collapse_guard(weights, ctx, config);
    let weights = skill_gap(weights, ctx, config);
    let weights = death_overs(weights, ctx, config);
    let weights = weights.enforce_mode(ctx.action);
    trace!(?weights, "modified outcome weights");
    ModifiedWeights { weights, commentary }
}
