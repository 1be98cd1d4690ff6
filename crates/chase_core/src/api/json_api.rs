//! String-in, string-out facade over the initializer, the ball engine and
//! the evaluator. Every call is stateless: the caller holds the match state
//! and hands it back with each ball.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use tracing::debug;

use super::config_env::engine_config_from_env;
use crate::engine::play_ball_with_config;
use crate::error::ChaseError;
use crate::init::initialize_match;
use crate::models::{MatchState, Player, RiskAction};
use crate::potm::calculate_potm;
use crate::roster::Roster;

pub const SCHEMA_VERSION: u8 = 1;
const DEFAULT_OVERS: u32 = 20;

pub mod error_codes {
    pub const SCHEMA: &str = "E_SCHEMA";
    pub const PARSE: &str = "E_PARSE";
    pub const ROSTER: &str = "E_ROSTER";
    pub const CONFIG: &str = "E_CONFIG";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn parse<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| err_code(error_codes::PARSE, format!("Invalid JSON request: {e}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| err_code(error_codes::PARSE, format!("Failed to serialize: {e}")))
}

fn roster_error(err: ChaseError) -> String {
    let code = if err.is_roster_error() { error_codes::ROSTER } else { error_codes::SCHEMA };
    err_code(code, err)
}

fn default_overs() -> u32 {
    DEFAULT_OVERS
}

#[derive(Debug, Deserialize)]
pub struct StartMatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub batting: Vec<Player>,
    pub bowling: Vec<Player>,
    #[serde(default = "default_overs")]
    pub total_overs: u32,
    /// One over against a small target; `total_overs` is ignored.
    #[serde(default)]
    pub super_over: bool,
}

#[derive(Debug, Deserialize)]
pub struct PlayBallRequest {
    pub seed: u64,
    pub state: MatchState,
    pub action: RiskAction,
    /// Must be the player whose id is the state's striker.
    pub striker: Player,
    /// Must be the player whose id is the state's current bowler.
    pub bowler: Player,
}

#[derive(Debug, Deserialize)]
pub struct PotmRequest {
    pub state: MatchState,
    pub players: Vec<Player>,
}

/// Builds a match from two rosters and returns it in play.
pub fn start_match_json(request_json: &str) -> Result<String, String> {
    let request: StartMatchRequest = parse(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::SCHEMA,
            format!("Unsupported schema version: {}", request.schema_version),
        ));
    }

    Roster::new(request.batting.clone()).validate().map_err(roster_error)?;
    Roster::new(request.bowling.clone()).validate().map_err(roster_error)?;

    let total_overs = if request.super_over { 1 } else { request.total_overs };
    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let mut state = initialize_match(
        &request.batting,
        &request.bowling,
        total_overs,
        request.super_over,
        &mut rng,
    )
    .map_err(roster_error)?;
    state.start();

    to_json(&state)
}

/// Resolves one ball against the supplied state. The seed drives this ball
/// only, so callers vary it per ball.
pub fn play_ball_json(request_json: &str) -> Result<String, String> {
    let request: PlayBallRequest = parse(request_json)?;
    let PlayBallRequest { seed, state, action, striker, bowler } = request;

    if striker.id != state.batsmen.striker_id {
        return Err(err_code(
            error_codes::ROSTER,
            format!("striker '{}' is not on strike (expected '{}')", striker.id, state.batsmen.striker_id),
        ));
    }
    if bowler.id != state.bowler.current_bowler_id {
        return Err(err_code(
            error_codes::ROSTER,
            format!("bowler '{}' is not bowling (expected '{}')", bowler.id, state.bowler.current_bowler_id),
        ));
    }

    let config = engine_config_from_env().map_err(|e| err_code(error_codes::CONFIG, e))?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let next = play_ball_with_config(&state, action, &striker, &bowler, &config, &mut rng);
    debug!(seed, balls = next.balls_bowled, "play_ball_json");

    to_json(&next)
}

/// Returns the award as JSON, or `null` when nobody has any figures.
pub fn player_of_the_match_json(request_json: &str) -> Result<String, String> {
    let request: PotmRequest = parse(request_json)?;
    to_json(&calculate_potm(&request.state, &request.players))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::demo_squad;
    use serde_json::{json, Value};

    fn start_request(seed: u64) -> String {
        json!({
            "schema_version": 1,
            "seed": seed,
            "batting": demo_squad("home"),
            "bowling": demo_squad("away"),
        })
        .to_string()
    }

    #[test]
    fn test_start_is_deterministic_per_seed() {
        let a = start_match_json(&start_request(77)).unwrap();
        let b = start_match_json(&start_request(77)).unwrap();
        assert_eq!(a, b);

        let state: Value = serde_json::from_str(&a).unwrap();
        assert_eq!(state["status"], "IN_PROGRESS");
        assert_eq!(state["totalOvers"], 20);
        assert_eq!(state["batsmen"]["strikerId"], "home-1");
        assert_eq!(state["matchEvents"]["lastBoundaryBall"], -10);
    }

    #[test]
    fn test_schema_version_checked() {
        let request = start_request(1).replace("\"schema_version\":1", "\"schema_version\":9");
        let err = start_match_json(&request).unwrap_err();
        assert!(err.starts_with("E_SCHEMA:"), "{err}");
    }

    #[test]
    fn test_parse_error_code() {
        assert!(start_match_json("{not json").unwrap_err().starts_with("E_PARSE:"));
        assert!(play_ball_json("[]").unwrap_err().starts_with("E_PARSE:"));
    }

    #[test]
    fn test_short_roster_is_roster_error() {
        let request = json!({
            "schema_version": 1,
            "seed": 1,
            "batting": &demo_squad("home")[..1],
            "bowling": demo_squad("away"),
        })
        .to_string();
        assert!(start_match_json(&request).unwrap_err().starts_with("E_ROSTER:"));
    }

    #[test]
    fn test_super_over_request() {
        let request = json!({
            "schema_version": 1,
            "seed": 4,
            "batting": demo_squad("home"),
            "bowling": demo_squad("away"),
            "total_overs": 20,
            "super_over": true,
        })
        .to_string();
        let state: MatchState = serde_json::from_str(&start_match_json(&request).unwrap()).unwrap();
        assert!(state.is_super_over);
        assert_eq!(state.total_overs, 1);
        assert!((12..=19).contains(&state.target));
    }

    #[test]
    fn test_potm_null_without_figures() {
        let state: MatchState = serde_json::from_str(&start_match_json(&start_request(2)).unwrap()).unwrap();
        let request = json!({ "state": state, "players": [] }).to_string();
        assert_eq!(player_of_the_match_json(&request).unwrap(), "null");
    }
}
