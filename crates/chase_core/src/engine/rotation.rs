//! End-of-over bookkeeping and bowler rotation.

use tracing::{debug, warn};

use super::config::RotationConfig;
use crate::models::{MatchState, PlayerId, BALLS_PER_OVER};

/// Runs in an over that make it a "big over".
pub const BIG_OVER_RUNS: u32 = 20;
/// Wickets in an over that make it a "collapse over".
pub const COLLAPSE_OVER_WICKETS: usize = 2;

pub fn is_over_boundary(state: &MatchState) -> bool {
    state.balls_bowled > 0 && state.balls_bowled % BALLS_PER_OVER == 0
}

/// Over-boundary processing. On a completed over, tallies big/collapse overs
/// and changes ends; on a completed over or a forced change, picks the next bowler.
pub fn process_over_boundary(state: &mut MatchState, forced: bool, config: &RotationConfig) {
    let over_complete = is_over_boundary(state);
    if !over_complete && !forced {
        return;
    }

    if over_complete {
        record_over_events(state);
        state.batsmen.swap_strike();
    }

    let previous = state.bowler.current_bowler_id.clone();
    match next_bowler(state, config) {
        Some(next) => {
            debug!(from = %previous, to = %next, forced, "bowling change");
            state.bowler.current_bowler_id = next;
        }
        None => warn!(bowler = %previous, "bowling attack exhausted; bowler unchanged"),
    }
}

fn record_over_events(state: &mut MatchState) {
    let start = state.ball_history.len().saturating_sub(BALLS_PER_OVER as usize);
    let over = &state.ball_history[start..];
    let runs: u32 = over.iter().map(|t| t.runs()).sum();
    let wickets = over.iter().filter(|t| t.is_wicket()).count();

    if runs >= BIG_OVER_RUNS {
        state.match_events.big_overs += 1;
    }
    if wickets >= COLLAPSE_OVER_WICKETS {
        state.match_events.collapse_overs += 1;
    }
}

/// Chooses who bowls next.
///
/// Candidates are every other bowler in `bowling_order` still under the ball
/// quota and the wicket cap. The first candidate after the current bowler's
/// position wins, wrapping to the first candidate. With no candidate, any
/// other bowler under quota is used regardless of wickets; `None` means the
/// attack is exhausted and the current bowler stays on.
pub fn next_bowler(state: &MatchState, config: &RotationConfig) -> Option<PlayerId> {
    let current = state.bowler.current_bowler_id.as_str();
    let balls_of = |id: &str| state.bowler_stats(id).map(|s| s.balls).unwrap_or(0);
    let wickets_of = |id: &str| state.bowler_stats(id).map(|s| s.wickets).unwrap_or(0);

    let eligible: Vec<(usize, &PlayerId)> = state
        .bowling_order
        .iter()
        .enumerate()
        .filter(|(_, id)| {
            id.as_str() != current
                && balls_of(id.as_str()) < config.quota_balls
                && wickets_of(id.as_str()) < config.wicket_cap
        })
        .collect();

    if let Some((_, first)) = eligible.first() {
        let current_idx = state.bowling_order.iter().position(|id| id == current);
        let after_current = eligible
            .iter()
            .find(|(idx, _)| current_idx.map_or(true, |c| *idx > c))
            .map(|(_, id)| *id);
        return Some(after_current.unwrap_or(*first).clone());
    }

    let fallback = state
        .bowling_order
        .iter()
        .find(|id| id.as_str() != current && balls_of(id.as_str()) < config.quota_balls)
        .cloned();
    if let Some(id) = &fallback {
        warn!(bowler = %id, "no bowler under the wicket cap; falling back");
    }
    fallback
}
