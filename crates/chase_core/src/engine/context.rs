use super::config::ModifierConfig;
use crate::models::{MatchState, Player, RiskAction, BALLS_PER_OVER};

/// Required rate reported when no balls remain.
pub const RRR_SENTINEL: f64 = 99.0;

/// Situation of the chase before the ball is bowled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallContext {
    pub action: RiskAction,
    pub overs_completed: u32,
    pub balls_into_over: u32,
    pub runs_needed: u32,
    pub balls_remaining: u32,
    pub required_rate: f64,
    pub is_death_phase: bool,
    pub wickets: u32,
    /// Legal balls since the ball that produced the last boundary.
    pub balls_since_boundary: i64,
    /// Striker batting skill minus bowler bowling skill.
    pub skill_diff: i32,
}

impl BallContext {
    pub fn derive(
        state: &MatchState,
        action: RiskAction,
        striker: &Player,
        bowler: &Player,
        config: &ModifierConfig,
    ) -> Self {
        let balls_bowled = state.balls_bowled;
        let runs_needed = state.runs_needed();
        let balls_remaining = state.balls_remaining();
        let required_rate = if balls_remaining > 0 {
            runs_needed as f64 / (balls_remaining as f64 / BALLS_PER_OVER as f64)
        } else {
            RRR_SENTINEL
        };

        Self {
            action,
            overs_completed: balls_bowled / BALLS_PER_OVER,
            balls_into_over: balls_bowled % BALLS_PER_OVER,
            runs_needed,
            balls_remaining,
            required_rate,
            is_death_phase: balls_bowled >= config.death_phase_start_ball,
            wickets: state.wickets,
            balls_since_boundary: balls_bowled as i64 - state.match_events.last_boundary_ball,
            skill_diff: striker.batting_skill as i32 - bowler.bowling_skill as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::ConstantSource;
    use crate::init::initialize_match;
    use crate::models::Role;
    use crate::roster::demo_squad;

    fn fresh_state() -> MatchState {
        let mut state = initialize_match(
            &demo_squad("bat"),
            &demo_squad("bowl"),
            20,
            false,
            &mut ConstantSource(0.5),
        )
        .unwrap();
        state.start();
        state
    }

    fn derive(state: &MatchState) -> BallContext {
        let striker = Player::new("s", "S", Role::Batsman, 70, 0);
        let bowler = Player::new("b", "B", Role::Bowler, 0, 55);
        BallContext::derive(state, RiskAction::Hard, &striker, &bowler, &ModifierConfig::default())
    }

    #[test]
    fn test_required_rate_mid_innings() {
        let mut state = fresh_state();
        state.target = 180;
        state.current_score = 60;
        state.balls_bowled = 62;
        let ctx = derive(&state);
        assert_eq!(ctx.overs_completed, 10);
        assert_eq!(ctx.balls_into_over, 2);
        assert_eq!(ctx.runs_needed, 120);
        assert_eq!(ctx.balls_remaining, 58);
        assert!((ctx.required_rate - 120.0 / (58.0 / 6.0)).abs() < 1e-9);
        assert_eq!(ctx.skill_diff, 15);
    }

    #[test]
    fn test_no_balls_left_reports_sentinel_rate() {
        let mut state = fresh_state();
        state.balls_bowled = 120;
        let ctx = derive(&state);
        assert_eq!(ctx.balls_remaining, 0);
        assert_eq!(ctx.required_rate, RRR_SENTINEL);
    }

    #[test]
    fn test_death_phase_starts_at_ball_90() {
        let mut state = fresh_state();
        state.balls_bowled = 89;
        let ctx = derive(&state);
        assert!(!ctx.is_death_phase);
        assert_eq!(ctx.overs_completed, 14);
        assert_eq!(ctx.balls_into_over, 5);

        state.balls_bowled = 90;
        assert!(derive(&state).is_death_phase);
    }

    #[test]
    fn test_balls_since_boundary() {
        let mut state = fresh_state();
        // no boundary yet: the tracker starts at -10
        assert_eq!(derive(&state).balls_since_boundary, 10);

        state.match_events.last_boundary_ball = 7;
        state.balls_bowled = 7;
        assert_eq!(derive(&state).balls_since_boundary, 0);
        state.balls_bowled = 8;
        assert_eq!(derive(&state).balls_since_boundary, 1);
    }

    #[test]
    fn test_huge_over_count_does_not_overflow() {
        let mut state = fresh_state();
        state.total_overs = u32::MAX;
        let ctx = derive(&state);
        assert_eq!(ctx.balls_remaining, u32::MAX);
        assert!(ctx.required_rate < 1.0);
    }
}
