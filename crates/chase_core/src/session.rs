//! Session controller: owns the rosters and the live state, and does the
//! player lookups the engine leaves to its caller.

use tracing::info;

use crate::engine::{play_ball_with_config, EngineConfig, RandomSource};
use crate::error::{ChaseError, Result};
use crate::init::{initialize_match_with, MatchSetup};
use crate::models::{MatchState, MatchStatus, Player, RiskAction, ScoreSummary};
use crate::potm::award_player_of_the_match;
use crate::roster::Roster;

#[derive(Debug, Clone)]
pub struct ChaseSession {
    batting: Roster,
    bowling: Roster,
    config: EngineConfig,
    setup: MatchSetup,
    state: MatchState,
}

impl ChaseSession {
    /// Validates both rosters, builds state 0 and puts it in play.
    pub fn start(
        batting: Roster,
        bowling: Roster,
        total_overs: u32,
        rng: &mut impl RandomSource,
    ) -> Result<Self> {
        Self::start_with(batting, bowling, total_overs, EngineConfig::default(), MatchSetup::default(), rng)
    }

    pub fn start_with(
        batting: Roster,
        bowling: Roster,
        total_overs: u32,
        config: EngineConfig,
        setup: MatchSetup,
        rng: &mut impl RandomSource,
    ) -> Result<Self> {
        batting.validate()?;
        bowling.validate()?;
        config.validate()?;
        let mut state =
            initialize_match_with(&setup, &batting.players, &bowling.players, total_overs, false, rng)?;
        state.start();
        Ok(Self { batting, bowling, config, setup, state })
    }

    /// Replaces the finished match with a one-over super over between the
    /// same sides.
    pub fn start_super_over(&mut self, rng: &mut impl RandomSource) -> Result<()> {
        let mut state = initialize_match_with(
            &self.setup,
            &self.batting.players,
            &self.bowling.players,
            self.setup.super_over_overs,
            true,
            rng,
        )?;
        state.start();
        info!(chase_target = state.target, "super over");
        self.state = state;
        Ok(())
    }

    /// Plays one ball. Once the match is over this is a no-op apart from
    /// awarding the player of the match if that has not happened yet.
    pub fn play(&mut self, action: RiskAction, rng: &mut impl RandomSource) -> Result<&MatchState> {
        if self.state.is_in_progress() {
            let striker = lookup(&self.batting, &self.state.batsmen.striker_id)?;
            let bowler = lookup(&self.bowling, &self.state.bowler.current_bowler_id)?;
            self.state = play_ball_with_config(&self.state, action, striker, bowler, &self.config, rng);
        }
        if self.state.status.is_terminal() {
            let players = self.all_players();
            award_player_of_the_match(&mut self.state, &players);
        }
        Ok(&self.state)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn status(&self) -> MatchStatus {
        self.state.status
    }

    pub fn is_over(&self) -> bool {
        self.state.status.is_terminal()
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_state(&self.state)
    }

    pub fn batting(&self) -> &Roster {
        &self.batting
    }

    pub fn bowling(&self) -> &Roster {
        &self.bowling
    }

    /// Either side's player by id.
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.batting.get(id).or_else(|| self.bowling.get(id))
    }

    pub fn striker(&self) -> Option<&Player> {
        self.batting.get(&self.state.batsmen.striker_id)
    }

    pub fn non_striker(&self) -> Option<&Player> {
        self.batting.get(&self.state.batsmen.non_striker_id)
    }

    pub fn current_bowler(&self) -> Option<&Player> {
        self.bowling.get(&self.state.bowler.current_bowler_id)
    }

    fn all_players(&self) -> Vec<Player> {
        self.batting.players.iter().chain(&self.bowling.players).cloned().collect()
    }
}

fn lookup<'a>(roster: &'a Roster, id: &str) -> Result<&'a Player> {
    roster.get(id).ok_or_else(|| ChaseError::UnknownPlayer(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::demo_squad;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session(seed: u64) -> (ChaseSession, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let session = ChaseSession::start(
            Roster::new(demo_squad("home")),
            Roster::new(demo_squad("away")),
            20,
            &mut rng,
        )
        .unwrap();
        (session, rng)
    }

    #[test]
    fn test_start_puts_match_in_play() {
        let (session, _) = session(3);
        assert_eq!(session.status(), MatchStatus::InProgress);
        assert_eq!(session.striker().unwrap().id, "home-1");
        assert_eq!(session.non_striker().unwrap().id, "home-2");
        assert!(session.current_bowler().is_some());
        assert_eq!(session.summary().overs, "0.0");
    }

    #[test]
    fn test_full_match_awards_potm_once() {
        let (mut session, mut rng) = session(11);
        let mut balls = 0;
        while !session.is_over() {
            session.play(RiskAction::Hard, &mut rng).unwrap();
            balls += 1;
            assert!(balls <= 120);
        }
        let award = session.state().player_of_the_match.clone().unwrap();
        assert!(session.player(&award.player_id).is_some());

        let before = session.state().clone();
        session.play(RiskAction::Safe, &mut rng).unwrap();
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_unknown_striker_is_an_error() {
        let (mut session, mut rng) = session(5);
        session.state.batsmen.striker_id = "nobody".into();
        let err = session.play(RiskAction::Safe, &mut rng).unwrap_err();
        assert!(matches!(err, ChaseError::UnknownPlayer(id) if id == "nobody"));
    }

    #[test]
    fn test_invalid_roster_aborts_start() {
        let mut squad = demo_squad("home");
        squad[1].id = squad[0].id.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result =
            ChaseSession::start(Roster::new(squad), Roster::new(demo_squad("away")), 20, &mut rng);
        assert!(matches!(result, Err(ChaseError::DuplicatePlayerId(_))));
    }

    #[test]
    fn test_super_over_restarts_with_one_over() {
        let (mut session, mut rng) = session(8);
        session.start_super_over(&mut rng).unwrap();
        let state = session.state();
        assert!(state.is_super_over);
        assert_eq!(state.total_overs, 1);
        assert!((12..=19).contains(&state.target));
        assert_eq!(state.status, MatchStatus::InProgress);
        assert_eq!(state.balls_bowled, 0);

        let mut balls = 0;
        while !session.is_over() {
            session.play(RiskAction::Hard, &mut rng).unwrap();
            balls += 1;
        }
        assert!(balls <= 6);
    }
}
