use serde_json::{json, Value};

use chase_core::models::{MatchState, MatchStatus, Player};
use chase_core::{demo_squad, play_ball_json, player_of_the_match_json, start_match_json};

fn start(seed: u64, overs: u32) -> MatchState {
    let request = json!({
        "schema_version": 1,
        "seed": seed,
        "batting": demo_squad("home"),
        "bowling": demo_squad("away"),
        "total_overs": overs,
    });
    serde_json::from_str(&start_match_json(&request.to_string()).unwrap()).unwrap()
}

fn find<'a>(players: &'a [Player], id: &str) -> &'a Player {
    players.iter().find(|p| p.id == id).unwrap()
}

fn play(state: &MatchState, seed: u64, action: &str) -> Result<String, String> {
    let batting = demo_squad("home");
    let bowling = demo_squad("away");
    let request = json!({
        "seed": seed,
        "state": state,
        "action": action,
        "striker": find(&batting, &state.batsmen.striker_id),
        "bowler": find(&bowling, &state.bowler.current_bowler_id),
    });
    play_ball_json(&request.to_string())
}

#[test]
fn same_seed_same_ball() {
    let state = start(10, 20);
    let a = play(&state, 99, "hard").unwrap();
    let b = play(&state, 99, "hard").unwrap();
    assert_eq!(a, b);

    let next: MatchState = serde_json::from_str(&a).unwrap();
    assert_eq!(next.balls_bowled, 1);
    assert_eq!(next.recent_actions.len(), 1);
}

#[test]
fn wire_format_uses_display_tokens() {
    let mut state = start(3, 20);
    for seed in 0..12 {
        state = serde_json::from_str(&play(&state, seed, "safe").unwrap()).unwrap();
    }
    let value: Value = serde_json::to_value(&state).unwrap();
    let history = value["ballHistory"].as_array().unwrap();
    assert_eq!(history.len(), 12);
    for token in history {
        assert!(["0", "1", "2", "3"].contains(&token.as_str().unwrap()));
    }
    assert_eq!(value["recentActions"], json!(["safe", "safe", "safe", "safe", "safe"]));
    assert_eq!(value["consecutiveActionStats"]["count"], 12);
    assert!(value["bowler"]["stats"][&state.bowler.current_bowler_id]["overs"].is_number());
}

#[test]
fn wrong_striker_rejected() {
    let state = start(5, 20);
    let batting = demo_squad("home");
    let bowling = demo_squad("away");
    let request = json!({
        "seed": 1,
        "state": state,
        "action": "hard",
        "striker": &batting[5],
        "bowler": find(&bowling, &state.bowler.current_bowler_id),
    });
    let err = play_ball_json(&request.to_string()).unwrap_err();
    assert!(err.starts_with("E_ROSTER:"), "{err}");
}

#[test]
fn unknown_action_is_parse_error() {
    let err = play(&start(5, 20), 1, "reckless").unwrap_err();
    assert!(err.starts_with("E_PARSE:"), "{err}");
}

#[test]
fn finished_state_passes_through() {
    let mut state = start(6, 20);
    state.status = MatchStatus::Lost;
    let next: MatchState = serde_json::from_str(&play(&state, 1, "hard").unwrap()).unwrap();
    assert_eq!(next, state);
}

#[test]
fn potm_after_full_chase() {
    let mut state = start(21, 2);
    let mut seed = 0;
    while state.is_in_progress() {
        state = serde_json::from_str(&play(&state, seed, "hard").unwrap()).unwrap();
        seed += 1;
    }
    assert!(seed <= 12);

    let players: Vec<Player> = demo_squad("home").into_iter().chain(demo_squad("away")).collect();
    let request = json!({ "state": state, "players": players });
    let award: Value =
        serde_json::from_str(&player_of_the_match_json(&request.to_string()).unwrap()).unwrap();
    let id = award["playerId"].as_str().unwrap();
    assert!(players.iter().any(|p| p.id == id));
    assert!(award["points"].as_u64().is_some());
}
