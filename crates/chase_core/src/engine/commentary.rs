//! Stock commentary lines.

use super::rng::RandomSource;
use crate::models::{BallOutcome, RiskAction};

pub const DISMISSALS: [&str; 5] = [
    "Clean Bowled!",
    "Caught at cover!",
    "Edged to the keeper!",
    "Holes out to long on!",
    "Trapped LBW!",
];

pub const FIELD_TIGHTENS: &str = "Field tightens, no gaps found.";
pub const LUCKY_EDGE: &str = "Thick edge... flies past slip for FOUR! Lucky.";
pub const BOUNDARY_STUNNER: &str =
    "He's hit that well but... CAUGHT! Absolute blinder on the ropes!";
pub const DRS_OVERTURNED: &str = "Given OUT! Review taken... Missing leg! NOT OUT.";
pub const CHASE_COMPLETE: &str = "CHASE COMPLETE! A fantastic victory!";
pub const SUPER_OVER: &str = "SUPER OVER! Every ball counts.";

/// Anti-spam line for a predictable slog, naming the bowler who read it.
pub fn predicted_slog(bowler_name: &str) -> String {
    format!("{bowler_name} predicted the slog!")
}

pub fn pitch_report(report: &str) -> String {
    format!("Pitch Report: {report} Chase on.")
}

/// Stock line for a ball that no rule has already described. Wickets draw
/// one of the dismissal lines; every other outcome has a fixed line.
pub fn stock_line(outcome: BallOutcome, action: RiskAction, rng: &mut impl RandomSource) -> &'static str {
    match outcome {
        BallOutcome::Wicket => DISMISSALS[rng.pick_index(DISMISSALS.len())],
        BallOutcome::Six => "That's huge! Out of the ground!",
        BallOutcome::Four => "Classy shot, finds the gap for four.",
        BallOutcome::Three => "Great placement! They push hard for three.",
        BallOutcome::Two => "Good running, they come back for two.",
        BallOutcome::One => "Quick single taken.",
        BallOutcome::Dot => match action {
            RiskAction::Hard => "Swing and a miss!",
            RiskAction::Safe => "Solid defense.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::ScriptedSource;

    #[test]
    fn test_wicket_line_draws_a_dismissal() {
        let mut rng = ScriptedSource::new(vec![0.99]);
        assert_eq!(stock_line(BallOutcome::Wicket, RiskAction::Hard, &mut rng), "Trapped LBW!");
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_scoring_lines_take_no_draw() {
        let mut rng = ScriptedSource::new(vec![0.5]);
        for outcome in BallOutcome::ALL {
            if outcome.is_wicket() {
                continue;
            }
            let line = stock_line(outcome, RiskAction::Safe, &mut rng);
            assert!(!DISMISSALS.contains(&line));
        }
        assert_eq!(rng.draws(), 0);
        assert_ne!(
            stock_line(BallOutcome::Dot, RiskAction::Hard, &mut rng),
            stock_line(BallOutcome::Dot, RiskAction::Safe, &mut rng)
        );
    }
}
