//! Plain-text scorecard.

use chase_core::models::scorecard::{current_over, economy, overs_notation, strike_rate};
use chase_core::models::{MatchStatus, PressureBand};
use chase_core::ChaseSession;

pub fn print_header(session: &ChaseSession) {
    let state = session.state();
    if state.is_super_over {
        println!("=== SUPER OVER: {} to win from 6 balls ===", state.target);
    } else {
        println!(
            "=== Chase {} from {} overs ({:?} pitch) ===",
            state.target, state.total_overs, state.pitch_type
        );
    }
    println!("{}", state.commentary);
}

pub fn print_ball(session: &ChaseSession) {
    let state = session.state();
    let summary = session.summary();

    let ticker: Vec<&str> =
        current_over(&state.ball_history, state.balls_bowled).iter().map(|t| t.as_str()).collect();
    let detail = state.last_ball_detail.map(|d| format!(" [{d}]")).unwrap_or_default();
    println!();
    println!("{}{}", state.commentary, detail);
    println!(
        "{}/{} ({} ov)  target {}  this over: {}",
        summary.score,
        summary.wickets,
        summary.overs,
        summary.target,
        ticker.join(" ")
    );

    if state.is_in_progress() {
        let rrr = summary.required_run_rate.map(|r| format!("{r:.2}")).unwrap_or_else(|| "-".into());
        let pressure = match summary.pressure {
            PressureBand::High => "  !! pressure",
            PressureBand::Elevated => "  ! pressure",
            PressureBand::Steady => "",
        };
        println!(
            "{}  CRR {:.2}  RRR {}{}",
            summary.equation(),
            summary.current_run_rate,
            rrr,
            pressure
        );
        print_crease(session);
    }
}

fn print_crease(session: &ChaseSession) {
    let state = session.state();
    for (player, marker) in [(session.striker(), "*"), (session.non_striker(), " ")] {
        let Some(player) = player else { continue };
        let stats = state.batter_stats(&player.id).copied().unwrap_or_default();
        let sr = strike_rate(&stats).map(|sr| format!("{sr:.1}")).unwrap_or_else(|| "-".into());
        println!("  {marker}{:<24} {:>3} ({:>3})  SR {sr}", player.name, stats.runs, stats.balls);
    }
    if let Some(bowler) = session.current_bowler() {
        let stats = state.bowler_stats(&bowler.id).copied().unwrap_or_default();
        println!(
            "   {:<24} {}-{}-{}  econ {:.2}",
            bowler.name,
            overs_notation(stats.balls),
            stats.runs_conceded,
            stats.wickets,
            economy(&stats)
        );
    }
}

pub fn print_result(session: &ChaseSession) {
    let state = session.state();
    println!();
    let verdict = match state.status {
        MatchStatus::Won => format!("WON with {} balls to spare", state.balls_remaining()),
        MatchStatus::Tied => "TIED".to_string(),
        MatchStatus::Lost => format!("LOST by {} runs", state.runs_needed() - 1),
        MatchStatus::Scheduled | MatchStatus::InProgress => "abandoned".to_string(),
    };
    println!(
        "Result: {verdict}  ({}/{} in {} ov, target {})",
        state.current_score,
        state.wickets,
        overs_notation(state.balls_bowled),
        state.target
    );
    println!(
        "Big overs: {}  Collapse overs: {}",
        state.match_events.big_overs, state.match_events.collapse_overs
    );

    if let Some(award) = &state.player_of_the_match {
        let name = session.player(&award.player_id).map(|p| p.name.as_str()).unwrap_or("?");
        println!("Player of the match: {name} ({}, {} pts)", award.reason, award.points);
    }
}
