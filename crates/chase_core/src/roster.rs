//! Roster provider: squads loaded from JSON, plus a built-in demo squad.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ChaseError, Result};
use crate::models::{Player, Role};

/// One side's players in batting order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Parse a JSON array of players and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Ids must be unique and every skill within 0..=100.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for player in &self.players {
            if !seen.insert(player.id.as_str()) {
                return Err(ChaseError::DuplicatePlayerId(player.id.clone()));
            }
            player.validate()?;
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Both sides of a fixture, as read from a rosters file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub batting: Roster,
    pub bowling: Roster,
}

impl Fixture {
    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: Fixture = serde_json::from_str(json)?;
        fixture.validate()?;
        Ok(fixture)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Each side on its own, then no id shared across sides: stats maps are
    /// keyed by id, so a shared id would merge two players' figures.
    pub fn validate(&self) -> Result<()> {
        self.batting.validate()?;
        self.bowling.validate()?;
        if let Some(clash) = self.bowling.players.iter().find(|p| self.batting.get(&p.id).is_some()) {
            return Err(ChaseError::DuplicatePlayerId(clash.id.clone()));
        }
        Ok(())
    }

    /// Two demo squads with distinct id prefixes.
    pub fn demo() -> Self {
        Self { batting: Roster::new(demo_squad("home")), bowling: Roster::new(demo_squad("away")) }
    }
}

const DEMO_LINEUP: [(Role, u8, u8); 11] = [
    (Role::Batsman, 88, 15),
    (Role::Batsman, 84, 10),
    (Role::Batsman, 86, 20),
    (Role::Batsman, 80, 25),
    (Role::Batsman, 76, 30),
    (Role::Wicketkeeper, 72, 5),
    (Role::AllRounder, 68, 74),
    (Role::AllRounder, 62, 78),
    (Role::Bowler, 30, 86),
    (Role::Bowler, 22, 84),
    (Role::Bowler, 18, 82),
];

/// Eleven generic players in batting order: five batsmen, a wicketkeeper,
/// two all-rounders and three bowlers. Ids are `{prefix}-1` to `{prefix}-11`;
/// the first batsman captains.
pub fn demo_squad(prefix: &str) -> Vec<Player> {
    DEMO_LINEUP
        .iter()
        .enumerate()
        .map(|(i, (role, bat, bowl))| {
            let number = i + 1;
            let player = Player::new(
                format!("{prefix}-{number}"),
                format!("{} {} {number}", capitalize(prefix), role.label()),
                *role,
                *bat,
                *bowl,
            );
            if i == 0 {
                player.captain()
            } else {
                player
            }
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
