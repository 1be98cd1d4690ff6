//! The simulation record owned by the engine between ball calls.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ball::{BallDetail, BallToken, RiskAction};
use super::player::PlayerId;

pub const BALLS_PER_OVER: u32 = 6;
pub const MAX_WICKETS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Freshly initialized. The engine refuses to resolve balls until `start`.
    Scheduled,
    InProgress,
    Won,
    Lost,
    Tied,
}

impl MatchStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchStatus::Won | MatchStatus::Lost | MatchStatus::Tied)
    }
}

/// Flavour only: shown in the pitch report, never consulted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PitchType {
    Flat,
    Green,
    Dusty,
}

impl PitchType {
    pub fn report(&self) -> &'static str {
        match self {
            PitchType::Flat => "Batting paradise!",
            PitchType::Green => "Something in it for the bowlers.",
            PitchType::Dusty => "Spinners might enjoy this.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatsmanStats {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub out: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlerStats {
    /// Legal balls bowled. Kept under the `overs` wire name; see `scorecard`
    /// for the `O.B` rendering.
    #[serde(rename = "overs")]
    pub balls: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    /// Never incremented.
    pub maidens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batsmen {
    pub striker_id: PlayerId,
    pub non_striker_id: PlayerId,
    pub stats: HashMap<PlayerId, BatsmanStats>,
}

impl Batsmen {
    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker_id, &mut self.non_striker_id);
    }

    pub fn is_at_crease(&self, id: &str) -> bool {
        self.striker_id == id || self.non_striker_id == id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingAttack {
    pub current_bowler_id: PlayerId,
    pub stats: HashMap<PlayerId, BowlerStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Partnership {
    pub runs: u32,
    pub balls: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStreak {
    pub last_action: Option<RiskAction>,
    pub count: u32,
}

impl ActionStreak {
    pub fn record(&mut self, action: RiskAction) {
        if self.last_action == Some(action) {
            self.count += 1;
        } else {
            self.last_action = Some(action);
            self.count = 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvents {
    /// Overs worth 20 or more runs.
    pub big_overs: u32,
    /// Overs with two or more wickets.
    pub collapse_overs: u32,
    /// `ballsBowled` value right after the last four or six.
    pub last_boundary_ball: i64,
}

impl Default for MatchEvents {
    fn default() -> Self {
        // Far enough back that the heat check cannot fire on the opening balls.
        Self { big_overs: 0, collapse_overs: 0, last_boundary_ball: -10 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOfTheMatch {
    pub player_id: PlayerId,
    pub points: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub target: u32,
    pub total_overs: u32,
    pub current_score: u32,
    pub wickets: u32,
    /// Legal deliveries only.
    pub balls_bowled: u32,
    pub ball_history: Vec<BallToken>,
    pub batsmen: Batsmen,
    pub bowler: BowlingAttack,
    pub partnership: Partnership,
    pub recent_actions: Vec<RiskAction>,
    #[serde(default)]
    pub consecutive_action_stats: ActionStreak,
    pub batting_order: Vec<PlayerId>,
    pub bowling_order: Vec<PlayerId>,
    pub status: MatchStatus,
    pub commentary: String,
    pub last_ball_outcome: Option<BallToken>,
    #[serde(default)]
    pub last_ball_detail: Option<BallDetail>,
    #[serde(default)]
    pub is_super_over: bool,
    pub pitch_type: PitchType,
    /// Never set by the engine.
    #[serde(default)]
    pub is_free_hit: bool,
    #[serde(default)]
    pub match_events: MatchEvents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_of_the_match: Option<PlayerOfTheMatch>,
}

impl MatchState {
    /// Moves a freshly initialized match into play. No-op in any other status.
    pub fn start(&mut self) {
        if self.status == MatchStatus::Scheduled {
            self.status = MatchStatus::InProgress;
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == MatchStatus::InProgress
    }

    pub fn max_balls(&self) -> u32 {
        self.total_overs.saturating_mul(BALLS_PER_OVER)
    }

    pub fn runs_needed(&self) -> u32 {
        self.target.saturating_sub(self.current_score)
    }

    pub fn balls_remaining(&self) -> u32 {
        self.max_balls().saturating_sub(self.balls_bowled)
    }

    pub fn batter_stats(&self, id: &str) -> Option<&BatsmanStats> {
        self.batsmen.stats.get(id)
    }

    pub fn bowler_stats(&self, id: &str) -> Option<&BowlerStats> {
        self.bowler.stats.get(id)
    }

    pub fn striker_stats(&self) -> Option<&BatsmanStats> {
        self.batter_stats(&self.batsmen.striker_id)
    }

    pub fn current_bowler_stats(&self) -> Option<&BowlerStats> {
        self.bowler_stats(&self.bowler.current_bowler_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_streak() {
        let mut streak = ActionStreak::default();
        streak.record(RiskAction::Hard);
        streak.record(RiskAction::Hard);
        assert_eq!(streak.count, 2);
        streak.record(RiskAction::Safe);
        assert_eq!(streak, ActionStreak { last_action: Some(RiskAction::Safe), count: 1 });
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&MatchStatus::InProgress).unwrap(), "\"IN_PROGRESS\"");
        assert_eq!(serde_json::to_string(&PitchType::Dusty).unwrap(), "\"DUSTY\"");
        assert!(MatchStatus::Tied.is_terminal());
        assert!(!MatchStatus::Scheduled.is_terminal());
    }

    #[test]
    fn test_bowler_stats_keep_overs_wire_name() {
        let stats = BowlerStats { balls: 8, runs_conceded: 12, wickets: 1, maidens: 0 };
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value["overs"], 8);
        assert_eq!(value["runsConceded"], 12);
    }
}
