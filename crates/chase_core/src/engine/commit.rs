//! Applies a resolved ball to the scoreboard.

use tracing::warn;

use crate::models::{BallDetail, BallOutcome, BallToken, MatchState, Partnership, MAX_WICKETS};

/// Everything decided about one ball before it touches the state.
#[derive(Debug, Clone, PartialEq)]
pub struct BallResolution {
    pub outcome: BallOutcome,
    pub detail: Option<BallDetail>,
    pub commentary: String,
}

impl BallResolution {
    pub fn runs(&self) -> u32 {
        self.outcome.runs()
    }

    pub fn is_out(&self) -> bool {
        self.outcome.is_wicket()
    }

    pub fn token(&self) -> BallToken {
        self.outcome.into()
    }
}

/// Counts the ball: team total, history, striker line, bowler line and the
/// boundary tracker. Every resolved ball is legal.
pub fn record_ball(state: &mut MatchState, resolution: &BallResolution) {
    let runs = resolution.runs();
    let token = resolution.token();

    state.balls_bowled += 1;
    state.current_score += runs;
    state.ball_history.push(token);
    state.last_ball_outcome = Some(token);
    state.last_ball_detail = resolution.detail;
    state.commentary = resolution.commentary.clone();

    if resolution.outcome.is_boundary() {
        state.match_events.last_boundary_ball = state.balls_bowled as i64;
    }

    let striker = state.batsmen.stats.entry(state.batsmen.striker_id.clone()).or_default();
    striker.runs += runs;
    striker.balls += 1;
    match resolution.outcome {
        BallOutcome::Four => striker.fours += 1,
        BallOutcome::Six => striker.sixes += 1,
        _ => {}
    }

    let bowler = state.bowler.stats.entry(state.bowler.current_bowler_id.clone()).or_default();
    bowler.runs_conceded += runs;
    bowler.balls += 1;
}

/// Dismisses the striker and brings in the next batter. Returns true when the
/// bowler has reached `wicket_cap` and must come off immediately.
pub fn handle_wicket(state: &mut MatchState, wicket_cap: u32) -> bool {
    let striker_id = state.batsmen.striker_id.clone();
    state.batsmen.stats.entry(striker_id.clone()).or_default().out = true;
    state.wickets = (state.wickets + 1).min(MAX_WICKETS);

    let bowler = state.bowler.stats.entry(state.bowler.current_bowler_id.clone()).or_default();
    bowler.wickets += 1;
    let bowler_off = bowler.wickets >= wicket_cap;

    if state.wickets < MAX_WICKETS {
        match next_batter(state) {
            Some(next) => {
                state.batsmen.striker_id = next;
                state.partnership = Partnership::default();
            }
            None => warn!(
                striker = %striker_id,
                wickets = state.wickets,
                "no batter left to come in; innings closes"
            ),
        }
    }
    bowler_off
}

/// First player in batting order who is neither out nor at the crease.
pub fn next_batter(state: &MatchState) -> Option<String> {
    state
        .batting_order
        .iter()
        .find(|id| {
            let out = state.batsmen.stats.get(id.as_str()).map(|s| s.out).unwrap_or(false);
            !out && !state.batsmen.is_at_crease(id)
        })
        .cloned()
}

/// Adds to the partnership and rotates strike on odd runs.
pub fn handle_runs(state: &mut MatchState, runs: u32) {
    state.partnership.runs += runs;
    state.partnership.balls += 1;
    if runs % 2 == 1 {
        state.batsmen.swap_strike();
    }
}

/// True once a dismissed batter is left at the crease because nobody could
/// replace them. The over boundary may already have moved them to the
/// non-striker's end, so both ends are checked.
pub fn batting_exhausted(state: &MatchState) -> bool {
    let is_out = |id: &str| state.batter_stats(id).map(|s| s.out).unwrap_or(false);
    is_out(&state.batsmen.striker_id) || is_out(&state.batsmen.non_striker_id)
}
