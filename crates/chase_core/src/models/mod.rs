pub mod ball;
pub mod match_state;
pub mod player;
pub mod scorecard;

pub use ball::{BallDetail, BallOutcome, BallToken, RiskAction};
pub use match_state::{
    ActionStreak, Batsmen, BatsmanStats, BowlerStats, BowlingAttack, MatchEvents, MatchState,
    MatchStatus, Partnership, PitchType, PlayerOfTheMatch, BALLS_PER_OVER, MAX_WICKETS,
};
pub use player::{Player, PlayerId, Role, MAX_SKILL};
pub use scorecard::{PressureBand, ScoreSummary};
