//! Read-only views derived from a [`MatchState`] for display.

use serde::Serialize;

use super::ball::BallToken;
use super::match_state::{BatsmanStats, BowlerStats, MatchState, MatchStatus, BALLS_PER_OVER};

/// `O.B` rendering of a legal-ball count, e.g. 45 balls → "7.3".
pub fn overs_notation(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

/// Runs per six balls; 0 before the first ball.
pub fn run_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        0.0
    } else {
        runs as f64 * BALLS_PER_OVER as f64 / balls as f64
    }
}

/// Runs per hundred balls faced.
pub fn strike_rate(stats: &BatsmanStats) -> Option<f64> {
    (stats.balls > 0).then(|| stats.runs as f64 * 100.0 / stats.balls as f64)
}

/// Runs conceded per six balls.
pub fn economy(stats: &BowlerStats) -> f64 {
    run_rate(stats.runs_conceded, stats.balls)
}

/// Tokens of the over in progress. At an over boundary this is the over just
/// completed. Illegal deliveries ride along without counting toward the six.
pub fn current_over(history: &[BallToken], balls_bowled: u32) -> &[BallToken] {
    let legal_in_over = match balls_bowled % BALLS_PER_OVER {
        0 if balls_bowled > 0 => BALLS_PER_OVER,
        n => n,
    };
    let mut legal = 0;
    let mut start = history.len();
    for (i, token) in history.iter().enumerate().rev() {
        if token.is_legal() {
            if legal == legal_in_over {
                break;
            }
            legal += 1;
        }
        start = i;
    }
    &history[start..]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PressureBand {
    Steady,
    Elevated,
    High,
}

impl PressureBand {
    pub fn from_required_rate(rrr: Option<f64>) -> Self {
        match rrr {
            Some(r) if r > 12.0 => PressureBand::High,
            Some(r) if r > 10.0 => PressureBand::Elevated,
            _ => PressureBand::Steady,
        }
    }
}

/// Headline numbers for the score bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub score: u32,
    pub wickets: u32,
    pub target: u32,
    pub overs: String,
    pub runs_needed: u32,
    pub balls_remaining: u32,
    pub current_run_rate: f64,
    /// `None` once no balls remain.
    pub required_run_rate: Option<f64>,
    pub pressure: PressureBand,
    pub status: MatchStatus,
}

impl ScoreSummary {
    pub fn from_state(state: &MatchState) -> Self {
        let balls_remaining = state.balls_remaining();
        let runs_needed = state.runs_needed();
        let required_run_rate = (balls_remaining > 0).then(|| run_rate(runs_needed, balls_remaining));
        Self {
            score: state.current_score,
            wickets: state.wickets,
            target: state.target,
            overs: overs_notation(state.balls_bowled),
            runs_needed,
            balls_remaining,
            current_run_rate: run_rate(state.current_score, state.balls_bowled),
            required_run_rate,
            pressure: PressureBand::from_required_rate(required_run_rate),
            status: state.status,
        }
    }

    /// "Need 42 from 30" style line.
    pub fn equation(&self) -> String {
        format!("Need {} from {}", self.runs_needed, self.balls_remaining)
    }
}
