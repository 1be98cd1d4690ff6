use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChaseError {
    #[error("Not enough batters: need at least 2, found {found}")]
    NotEnoughBatters { found: usize },

    #[error("Not enough bowlers: need at least 1, found {found}")]
    NotEnoughBowlers { found: usize },

    #[error("Duplicate player id: {0}")]
    DuplicatePlayerId(String),

    #[error("Skill out of range for {player}: {field} = {value} (expected 0..=100)")]
    SkillOutOfRange { player: String, field: &'static str, value: u8 },

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChaseError {
    /// Errors that come from the caller's rosters rather than from I/O or config.
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            ChaseError::NotEnoughBatters { .. }
                | ChaseError::NotEnoughBowlers { .. }
                | ChaseError::DuplicatePlayerId(_)
                | ChaseError::SkillOutOfRange { .. }
                | ChaseError::UnknownPlayer(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChaseError>;
