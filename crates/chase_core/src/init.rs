//! Match Initializer: builds state 0 of a chase.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::engine::commentary;
use crate::engine::rng::RandomSource;
use crate::error::{ChaseError, Result};
use crate::models::{
    ActionStreak, Batsmen, BatsmanStats, BowlerStats, BowlingAttack, MatchEvents, MatchState,
    MatchStatus, Partnership, PitchType, Player, PlayerId,
};

/// Initializer tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSetup {
    pub target_range: (u32, u32),
    pub super_over_target_range: (u32, u32),
    pub super_over_overs: u32,
    /// Cumulative cut points for FLAT and GREEN; the rest is DUSTY.
    pub pitch_cuts: (f64, f64),
    /// Smallest bowling pool; padded from the rest of the roster.
    pub min_bowling_options: usize,
    /// Largest bowling pool when there are enough specialists.
    pub max_bowling_options: usize,
    /// Chance that each adjacent pair of the pool swaps places. At 0.3 about
    /// 70% of neighbouring pairs keep their order, so specialists listed first
    /// still tend to open the bowling.
    pub shuffle_swap_chance: f64,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            target_range: (175, 215),
            super_over_target_range: (12, 19),
            super_over_overs: 1,
            pitch_cuts: (0.33, 0.66),
            min_bowling_options: 5,
            max_bowling_options: 6,
            shuffle_swap_chance: 0.3,
        }
    }
}

/// Builds a SCHEDULED match with the reference setup.
///
/// Fails when there are fewer than two batters or no bowlers; nothing else is
/// validated here (see [`crate::roster::Roster`]).
pub fn initialize_match(
    batting: &[Player],
    bowling: &[Player],
    total_overs: u32,
    is_super_over: bool,
    rng: &mut impl RandomSource,
) -> Result<MatchState> {
    initialize_match_with(&MatchSetup::default(), batting, bowling, total_overs, is_super_over, rng)
}

pub fn initialize_match_with(
    setup: &MatchSetup,
    batting: &[Player],
    bowling: &[Player],
    total_overs: u32,
    is_super_over: bool,
    rng: &mut impl RandomSource,
) -> Result<MatchState> {
    if batting.len() < 2 {
        return Err(ChaseError::NotEnoughBatters { found: batting.len() });
    }
    if bowling.is_empty() {
        return Err(ChaseError::NotEnoughBowlers { found: 0 });
    }
    if total_overs == 0 {
        return Err(ChaseError::InvalidRequest("total_overs must be at least 1".into()));
    }

    let target = pick_target(setup, is_super_over, rng);
    let pitch_type = pick_pitch(setup, rng);
    let mut bowling_order = bowling_pool(bowling, setup);
    biased_shuffle(&mut bowling_order, setup.shuffle_swap_chance, rng);

    let batting_order: Vec<PlayerId> = batting.iter().map(|p| p.id.clone()).collect();
    let batting_stats: HashMap<PlayerId, BatsmanStats> =
        batting_order.iter().map(|id| (id.clone(), BatsmanStats::default())).collect();
    let bowling_stats: HashMap<PlayerId, BowlerStats> =
        bowling.iter().map(|p| (p.id.clone(), BowlerStats::default())).collect();

    let commentary = if is_super_over {
        commentary::SUPER_OVER.to_string()
    } else {
        commentary::pitch_report(pitch_type.report())
    };

    info!(chase_target = target, total_overs, is_super_over, pitch = ?pitch_type, "match initialized");

    Ok(MatchState {
        target,
        total_overs,
        current_score: 0,
        wickets: 0,
        balls_bowled: 0,
        ball_history: Vec::new(),
        batsmen: Batsmen {
            striker_id: batting_order[0].clone(),
            non_striker_id: batting_order[1].clone(),
            stats: batting_stats,
        },
        bowler: BowlingAttack { current_bowler_id: bowling_order[0].clone(), stats: bowling_stats },
        partnership: Partnership::default(),
        recent_actions: Vec::new(),
        consecutive_action_stats: ActionStreak::default(),
        batting_order,
        bowling_order,
        status: MatchStatus::Scheduled,
        commentary,
        last_ball_outcome: None,
        last_ball_detail: None,
        is_super_over,
        pitch_type,
        is_free_hit: false,
        match_events: MatchEvents::default(),
        player_of_the_match: None,
    })
}

fn pick_target(setup: &MatchSetup, is_super_over: bool, rng: &mut impl RandomSource) -> u32 {
    let (low, high) =
        if is_super_over { setup.super_over_target_range } else { setup.target_range };
    rng.range_inclusive(low, high)
}

fn pick_pitch(setup: &MatchSetup, rng: &mut impl RandomSource) -> PitchType {
    let roll = rng.next_unit();
    if roll < setup.pitch_cuts.0 {
        PitchType::Flat
    } else if roll < setup.pitch_cuts.1 {
        PitchType::Green
    } else {
        PitchType::Dusty
    }
}

/// Specialists first (bowlers and all-rounders, roster order), padded with
/// the rest of the roster up to the minimum, capped at the maximum.
pub fn bowling_pool(bowling: &[Player], setup: &MatchSetup) -> Vec<PlayerId> {
    let specialists: Vec<PlayerId> =
        bowling.iter().filter(|p| p.role.is_bowling_option()).map(|p| p.id.clone()).collect();

    if specialists.len() >= setup.min_bowling_options {
        return specialists.into_iter().take(setup.max_bowling_options).collect();
    }

    let others = bowling.iter().filter(|p| !p.role.is_bowling_option()).map(|p| p.id.clone());
    specialists.into_iter().chain(others).take(setup.min_bowling_options).collect()
}

/// One pass of adjacent swaps, each taken with `swap_chance`.
pub fn biased_shuffle<T>(items: &mut [T], swap_chance: f64, rng: &mut impl RandomSource) {
    for i in 1..items.len() {
        if rng.chance(swap_chance) {
            items.swap(i - 1, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::ConstantSource;
    use crate::models::Role;
    use crate::roster::demo_squad;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn player(id: &str, role: Role) -> Player {
        Player::new(id, id.to_uppercase(), role, 50, 50)
    }

    #[test]
    fn test_normal_match_shape() {
        let batting = demo_squad("t1");
        let bowling = demo_squad("t2");
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = initialize_match(&batting, &bowling, 20, false, &mut rng).unwrap();

        assert!((175..=215).contains(&state.target));
        assert_eq!(state.status, MatchStatus::Scheduled);
        assert_eq!(state.batsmen.striker_id, batting[0].id);
        assert_eq!(state.batsmen.non_striker_id, batting[1].id);
        assert_eq!(state.bowler.current_bowler_id, state.bowling_order[0]);
        assert_eq!(state.batsmen.stats.len(), 11);
        assert_eq!(state.bowler.stats.len(), 11);
        assert!(state.batsmen.stats.values().all(|s| *s == BatsmanStats::default()));
        assert_eq!(state.match_events.last_boundary_ball, -10);
        assert!(state.commentary.starts_with("Pitch Report:"));
    }

    #[test]
    fn test_super_over_target_and_overs() {
        let batting = demo_squad("t1");
        let bowling = demo_squad("t2");
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let state = initialize_match(&batting, &bowling, 1, true, &mut rng).unwrap();
            assert!((12..=19).contains(&state.target));
            assert_eq!(state.total_overs, 1);
            assert_eq!(state.max_balls(), 6);
            assert_eq!(state.commentary, commentary::SUPER_OVER);
        }
    }

    #[test]
    fn test_midpoint_setup() {
        let batting = demo_squad("t1");
        let bowling = demo_squad("t2");
        let state = initialize_match(&batting, &bowling, 20, false, &mut ConstantSource(0.5)).unwrap();
        assert_eq!(state.target, 195);
        assert_eq!(state.pitch_type, PitchType::Green);
        // no swaps at the midpoint: pool is in roster order
        assert_eq!(state.bowling_order, bowling_pool(&bowling, &MatchSetup::default()));
    }

    #[test]
    fn test_pool_pads_to_five() {
        let squad = vec![
            player("a", Role::Batsman),
            player("b", Role::Bowler),
            player("c", Role::Batsman),
            player("d", Role::AllRounder),
            player("e", Role::Wicketkeeper),
            player("f", Role::Batsman),
            player("g", Role::Batsman),
        ];
        let pool = bowling_pool(&squad, &MatchSetup::default());
        assert_eq!(pool, vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_pool_caps_at_six() {
        let squad: Vec<Player> =
            (0..8).map(|i| player(&format!("b{i}"), Role::Bowler)).collect();
        let pool = bowling_pool(&squad, &MatchSetup::default());
        assert_eq!(pool.len(), 6);
        assert_eq!(pool[0], "b0");
    }

    #[test]
    fn test_small_roster_pool() {
        let squad = vec![player("a", Role::Batsman), player("b", Role::Batsman)];
        assert_eq!(bowling_pool(&squad, &MatchSetup::default()).len(), 2);
    }

    #[test]
    fn test_shuffle_bias_keeps_most_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut first_stays = 0;
        for _ in 0..2_000 {
            let mut items = [0, 1, 2, 3, 4, 5];
            biased_shuffle(&mut items, 0.3, &mut rng);
            if items[0] == 0 {
                first_stays += 1;
            }
        }
        // the opener only moves when the first pair swaps
        let share = first_stays as f64 / 2_000.0;
        assert!((share - 0.7).abs() < 0.05, "share was {share}");
    }

    #[test]
    fn test_guards() {
        let one = vec![player("a", Role::Batsman)];
        let squad = demo_squad("t2");
        let mut rng = ConstantSource(0.5);
        assert!(matches!(
            initialize_match(&one, &squad, 20, false, &mut rng),
            Err(ChaseError::NotEnoughBatters { found: 1 })
        ));
        assert!(matches!(
            initialize_match(&squad, &[], 20, false, &mut rng),
            Err(ChaseError::NotEnoughBowlers { found: 0 })
        ));
        assert!(initialize_match(&squad, &squad, 0, false, &mut rng).is_err());
    }
}
