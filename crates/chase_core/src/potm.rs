//! Post-Match Evaluator: player of the match from the final scorecard.

use tracing::info;

use crate::models::{MatchState, Player, PlayerOfTheMatch};

const POINTS_PER_FOUR: u32 = 2;
const POINTS_PER_SIX: u32 = 4;
const FIFTY: u32 = 50;
const FIFTY_BONUS: u32 = 40;
const POINTS_PER_WICKET: u32 = 40;
/// Runs above this earn a mention in the reason.
const NOTABLE_RUNS: u32 = 40;
const DEFAULT_REASON: &str = "Impact Player";

/// Impact points and reason for one player, or `None` when the player has
/// neither a batting nor a bowling line in `state`.
pub fn impact_score(state: &MatchState, player_id: &str) -> Option<(u32, String)> {
    let batting = state.batter_stats(player_id);
    let bowling = state.bowler_stats(player_id);
    if batting.is_none() && bowling.is_none() {
        return None;
    }

    let mut points = 0;
    let mut reasons = Vec::new();
    if let Some(bat) = batting {
        points += bat.runs + bat.fours * POINTS_PER_FOUR + bat.sixes * POINTS_PER_SIX;
        if bat.runs >= FIFTY {
            points += FIFTY_BONUS;
        }
        if bat.runs > NOTABLE_RUNS {
            reasons.push(format!("{} runs", bat.runs));
        }
    }
    if let Some(bowl) = bowling {
        points += bowl.wickets * POINTS_PER_WICKET;
        if bowl.wickets > 0 {
            reasons.push(format!("{} wickets", bowl.wickets));
        }
    }

    let reason = if reasons.is_empty() { DEFAULT_REASON.to_string() } else { reasons.join(" & ") };
    Some((points, reason))
}

/// Highest impact score across `players`; the first of equal scores wins.
pub fn calculate_potm(state: &MatchState, players: &[Player]) -> Option<PlayerOfTheMatch> {
    let mut best: Option<PlayerOfTheMatch> = None;
    for player in players {
        let Some((points, reason)) = impact_score(state, &player.id) else {
            continue;
        };
        if best.as_ref().map_or(true, |b| points > b.points) {
            best = Some(PlayerOfTheMatch { player_id: player.id.clone(), points, reason });
        }
    }
    best
}

/// Records the award on a finished match. Does nothing while the match is
/// live or once an award exists. Returns true when an award was recorded.
pub fn award_player_of_the_match(state: &mut MatchState, players: &[Player]) -> bool {
    if !state.status.is_terminal() || state.player_of_the_match.is_some() {
        return false;
    }
    match calculate_potm(state, players) {
        Some(award) => {
            info!(player = %award.player_id, points = award.points, reason = %award.reason, "player of the match");
            state.player_of_the_match = Some(award);
            true
        }
        None => false,
    }
}
