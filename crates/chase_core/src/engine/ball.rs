//! Ball Resolution Engine entry point.
//!
//! `play_ball` runs the steps in a fixed order:
//! context → base weights → modifiers → sample → twist → commit →
//! wicket / runs → over boundary → termination.
//!
//! All randomness comes from the injected [`RandomSource`]; the draw order is
//! four jitter draws, the anti-spam roll (only when spamming), the sample,
//! the twist roll (only when the sample triggers one), then the dismissal
//! line (only for an undescribed wicket).

use tracing::{debug, info};

use super::commentary;
use super::commit::{handle_runs, handle_wicket, record_ball, BallResolution};
use super::config::{EngineConfig, TwistConfig};
use super::context::BallContext;
use super::modifiers::{apply_modifiers, remember_action};
use super::rng::RandomSource;
use super::rotation::process_over_boundary;
use super::sampling::sample_outcome;
use super::termination::decide_status;
use super::twists::apply_twist;
use super::weights::base_weights;
use crate::models::{BallOutcome, MatchState, MatchStatus, Player, RiskAction};

/// Resolves one delivery with the reference balance.
///
/// `striker` and `bowler` are looked up by the caller from the ids stored in
/// `state`; only their skill ratings (and the bowler's name, for commentary)
/// are read. Returns `state` unchanged unless the match is in progress.
pub fn play_ball(
    state: &MatchState,
    action: RiskAction,
    striker: &Player,
    bowler: &Player,
    rng: &mut impl RandomSource,
) -> MatchState {
    play_ball_with_config(state, action, striker, bowler, &EngineConfig::default(), rng)
}

pub fn play_ball_with_config(
    state: &MatchState,
    action: RiskAction,
    striker: &Player,
    bowler: &Player,
    config: &EngineConfig,
    rng: &mut impl RandomSource,
) -> MatchState {
    if !state.is_in_progress() {
        return state.clone();
    }

    let ctx = BallContext::derive(state, action, striker, bowler, &config.modifiers);
    let history =
        remember_action(&state.recent_actions, action, config.modifiers.recent_actions_window);

    let weights = base_weights(action, &config.weights, rng);
    let modified = apply_modifiers(weights, &ctx, &history, &bowler.name, &config.modifiers, rng);
    let sampled = sample_outcome(modified.weights, rng);
    let resolution = resolve_ball(sampled, action, modified.commentary, &config.twists, rng);

    let mut next = state.clone();
    next.recent_actions = history;
    next.consecutive_action_stats.record(action);
    record_ball(&mut next, &resolution);

    let bowler_off = if resolution.is_out() {
        handle_wicket(&mut next, config.rotation.wicket_cap)
    } else {
        handle_runs(&mut next, resolution.runs());
        false
    };

    process_over_boundary(&mut next, bowler_off, &config.rotation);

    next.status = decide_status(&next);
    if next.status == MatchStatus::Won {
        next.commentary = commentary::CHASE_COMPLETE.to_string();
    }

    debug!(
        action = action.as_str(),
        ball = %resolution.token(),
        score = next.current_score,
        wickets = next.wickets,
        balls = next.balls_bowled,
        "ball resolved"
    );
    if next.status.is_terminal() {
        info!(
            status = ?next.status,
            score = next.current_score,
            chase_target = next.target,
            wickets = next.wickets,
            balls = next.balls_bowled,
            "chase finished"
        );
    }
    next
}

/// Applies any twist to the sampled outcome and settles the commentary line.
/// A twist's line beats one claimed by a modifier; stock lines fill the gap.
pub fn resolve_ball(
    sampled: BallOutcome,
    action: RiskAction,
    claimed: Option<String>,
    config: &TwistConfig,
    rng: &mut impl RandomSource,
) -> BallResolution {
    let (outcome, detail, claimed) = match apply_twist(sampled, action, config, rng) {
        Some(twist) => (twist.outcome, Some(twist.detail), Some(twist.commentary.to_string())),
        None => (sampled, None, claimed),
    };

    let commentary = match claimed {
        Some(line) => line,
        None => commentary::stock_line(outcome, action, rng).to_string(),
    };

    BallResolution { outcome, detail, commentary }
}
