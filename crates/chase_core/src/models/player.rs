use serde::{Deserialize, Serialize};

use crate::error::{ChaseError, Result};

pub type PlayerId = String;

/// Highest value a skill rating may take.
pub const MAX_SKILL: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    Wicketkeeper,
}

impl Role {
    /// Specialist bowling options, preferred when building the bowling pool.
    pub fn is_bowling_option(&self) -> bool {
        matches!(self, Role::Bowler | Role::AllRounder)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-rounder",
            Role::Wicketkeeper => "Wicketkeeper",
        }
    }
}

/// Roster entry supplied by the roster provider. Immutable once fetched;
/// match state only refers to players by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub batting_skill: u8,
    pub bowling_skill: u8,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_captain: bool,
}

impl Player {
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        role: Role,
        batting_skill: u8,
        bowling_skill: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            batting_skill,
            bowling_skill,
            is_captain: false,
        }
    }

    pub fn captain(mut self) -> Self {
        self.is_captain = true;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("battingSkill", self.batting_skill), ("bowlingSkill", self.bowling_skill)] {
            if value > MAX_SKILL {
                return Err(ChaseError::SkillOutOfRange { player: self.id.clone(), field, value });
            }
        }
        Ok(())
    }
}
