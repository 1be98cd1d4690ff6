use super::commit::batting_exhausted;
use crate::models::{MatchState, MatchStatus, MAX_WICKETS};

/// Status after a ball. Reaching the target wins outright; running out of
/// balls or batters finishes the chase one run short as a tie, anything
/// else as a loss.
pub fn decide_status(state: &MatchState) -> MatchStatus {
    if state.current_score >= state.target {
        return MatchStatus::Won;
    }
    let innings_over = state.wickets >= MAX_WICKETS
        || state.balls_bowled >= state.max_balls()
        || batting_exhausted(state);
    if !innings_over {
        return MatchStatus::InProgress;
    }
    if state.current_score + 1 == state.target {
        MatchStatus::Tied
    } else {
        MatchStatus::Lost
    }
}
