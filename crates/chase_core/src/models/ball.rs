//! Per-delivery vocabulary: the risk posture chosen by the batter, the
//! sampled outcome, and the token recorded in ball history.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    /// Rotate strike: only 0, 1, 2 or 3 can come of it.
    Safe,
    /// Go big: only 0, 4, 6 or a wicket.
    Hard,
}

impl RiskAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAction::Safe => "safe",
            RiskAction::Hard => "hard",
        }
    }
}

impl std::str::FromStr for RiskAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "safe" | "s" => Ok(RiskAction::Safe),
            "hard" | "h" => Ok(RiskAction::Hard),
            other => Err(format!("unknown action '{other}' (expected safe or hard)")),
        }
    }
}

/// Outcome drawn by the sampler. Order matches the sampling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallOutcome {
    Dot,
    One,
    Two,
    Three,
    Four,
    Six,
    Wicket,
}

impl BallOutcome {
    pub const COUNT: usize = 7;

    pub const ALL: [BallOutcome; BallOutcome::COUNT] = [
        BallOutcome::Dot,
        BallOutcome::One,
        BallOutcome::Two,
        BallOutcome::Three,
        BallOutcome::Four,
        BallOutcome::Six,
        BallOutcome::Wicket,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn runs(self) -> u32 {
        match self {
            BallOutcome::Dot | BallOutcome::Wicket => 0,
            BallOutcome::One => 1,
            BallOutcome::Two => 2,
            BallOutcome::Three => 3,
            BallOutcome::Four => 4,
            BallOutcome::Six => 6,
        }
    }

    pub fn is_wicket(self) -> bool {
        self == BallOutcome::Wicket
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, BallOutcome::Four | BallOutcome::Six)
    }

    /// Feasible outcome set for each action. Modifiers may rescale weights
    /// inside the set but never widen it.
    pub fn is_feasible(self, action: RiskAction) -> bool {
        match action {
            RiskAction::Safe => matches!(
                self,
                BallOutcome::Dot | BallOutcome::One | BallOutcome::Two | BallOutcome::Three
            ),
            RiskAction::Hard => matches!(
                self,
                BallOutcome::Dot | BallOutcome::Four | BallOutcome::Six | BallOutcome::Wicket
            ),
        }
    }
}

/// Token stored in `ballHistory`. Wides and no-balls exist in the wire
/// vocabulary but the engine never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallToken {
    #[serde(rename = "0")]
    Dot,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "W")]
    Wicket,
    #[serde(rename = "NB")]
    NoBall,
    #[serde(rename = "wd")]
    Wide,
}

impl BallToken {
    /// Runs credited by the token when summing an over. Non-numeric tokens count zero.
    pub fn runs(self) -> u32 {
        match self {
            BallToken::One => 1,
            BallToken::Two => 2,
            BallToken::Three => 3,
            BallToken::Four => 4,
            BallToken::Five => 5,
            BallToken::Six => 6,
            BallToken::Dot | BallToken::Wicket | BallToken::NoBall | BallToken::Wide => 0,
        }
    }

    pub fn is_wicket(self) -> bool {
        self == BallToken::Wicket
    }

    pub fn is_legal(self) -> bool {
        !matches!(self, BallToken::NoBall | BallToken::Wide)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BallToken::Dot => "0",
            BallToken::One => "1",
            BallToken::Two => "2",
            BallToken::Three => "3",
            BallToken::Four => "4",
            BallToken::Five => "5",
            BallToken::Six => "6",
            BallToken::Wicket => "W",
            BallToken::NoBall => "NB",
            BallToken::Wide => "wd",
        }
    }
}

impl From<BallOutcome> for BallToken {
    fn from(outcome: BallOutcome) -> Self {
        match outcome {
            BallOutcome::Dot => BallToken::Dot,
            BallOutcome::One => BallToken::One,
            BallOutcome::Two => BallToken::Two,
            BallOutcome::Three => BallToken::Three,
            BallOutcome::Four => BallToken::Four,
            BallOutcome::Six => BallToken::Six,
            BallOutcome::Wicket => BallToken::Wicket,
        }
    }
}

impl fmt::Display for BallToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag set by a post-sampling twist, shown next to the ball result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallDetail {
    Edge,
    Stunner,
    #[serde(rename = "DRS")]
    Drs,
}

impl fmt::Display for BallDetail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            BallDetail::Edge => "Edge",
            BallDetail::Stunner => "Stunner",
            BallDetail::Drs => "DRS",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_partition() {
        let safe: Vec<BallOutcome> =
            BallOutcome::ALL.into_iter().filter(|o| o.is_feasible(RiskAction::Safe)).collect();
        let hard: Vec<BallOutcome> =
            BallOutcome::ALL.into_iter().filter(|o| o.is_feasible(RiskAction::Hard)).collect();
        assert_eq!(safe.len(), 4);
        assert_eq!(hard.len(), 4);
        // Dot is the only outcome both postures share
        let shared: Vec<BallOutcome> = safe.into_iter().filter(|o| hard.contains(o)).collect();
        assert_eq!(shared, vec![BallOutcome::Dot]);
    }

    #[test]
    fn test_token_wire_format() {
        let history = vec![BallToken::Dot, BallToken::Six, BallToken::Wicket, BallToken::Wide];
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"["0","6","W","wd"]"#);
        assert_eq!(BallToken::from(BallOutcome::Three).runs(), 3);
        assert!(!BallToken::NoBall.is_legal());
    }

    #[test]
    fn test_action_parse() {
        assert_eq!("HARD".parse::<RiskAction>(), Ok(RiskAction::Hard));
        assert_eq!("s".parse::<RiskAction>(), Ok(RiskAction::Safe));
        assert!("slog".parse::<RiskAction>().is_err());
    }
}
