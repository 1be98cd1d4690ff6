//! # Engine Configuration
//!
//! Every tuning constant of the ball engine lives here. `EngineConfig::default()`
//! is the reference balance; JSON files may override any subset of fields.
//!
//! ```rust
//! use chase_core::engine::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ChaseError, Result};

/// Base weights per outcome, before jitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    /// Dot / one / two / three.
    pub safe: [f64; 4],
    /// Dot / four / six / wicket.
    pub hard: [f64; 4],
    pub jitter_low: f64,
    pub jitter_high: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            safe: [35.0, 42.0, 13.0, 10.0],
            hard: [32.0, 38.0, 12.0, 18.0],
            jitter_low: 0.9,
            jitter_high: 1.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierConfig {
    /// Size of the recent-actions window kept on the state.
    pub recent_actions_window: usize,
    /// Identical trailing actions (current one included) that count as spam.
    pub spam_streak: usize,
    pub spam_penalty_chance: f64,
    pub spam_hard_wicket_bonus: f64,
    pub spam_safe_dot_bonus: f64,

    pub heat_check_gap: i64,
    pub heat_wicket_bonus: f64,
    pub heat_dot_bonus: f64,
    pub heat_six_penalty: f64,

    pub collapse_min_wickets: u32,
    pub collapse_max_overs: u32,
    pub collapse_wicket_scale: f64,
    pub collapse_dot_bonus: f64,

    pub skill_gap_threshold: i32,
    pub skill_hard_boundary_bonus: f64,
    pub skill_hard_wicket_bonus: f64,
    pub skill_hard_dot_bonus: f64,
    pub skill_safe_one_bonus: f64,
    pub skill_safe_two_bonus: f64,
    pub skill_safe_dot_bonus: f64,

    /// First legal ball of the death phase (ball 90 is the start of the 16th over).
    pub death_phase_start_ball: u32,
    pub death_six_bonus: f64,
    pub death_wicket_bonus: f64,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            recent_actions_window: 5,
            spam_streak: 3,
            spam_penalty_chance: 0.5,
            spam_hard_wicket_bonus: 35.0,
            spam_safe_dot_bonus: 40.0,

            heat_check_gap: 1,
            heat_wicket_bonus: 15.0,
            heat_dot_bonus: 10.0,
            heat_six_penalty: 5.0,

            collapse_min_wickets: 5,
            collapse_max_overs: 8,
            collapse_wicket_scale: 0.3,
            collapse_dot_bonus: 20.0,

            skill_gap_threshold: 20,
            skill_hard_boundary_bonus: 10.0,
            skill_hard_wicket_bonus: 15.0,
            skill_hard_dot_bonus: 10.0,
            skill_safe_one_bonus: 15.0,
            skill_safe_two_bonus: 10.0,
            skill_safe_dot_bonus: 20.0,

            death_phase_start_ball: 90,
            death_six_bonus: 15.0,
            death_wicket_bonus: 10.0,
        }
    }
}

/// Probabilities of the post-sampling twists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwistConfig {
    pub edge_chance: f64,
    pub stunner_chance: f64,
    pub drs_chance: f64,
}

impl Default for TwistConfig {
    fn default() -> Self {
        Self { edge_chance: 0.05, stunner_chance: 0.03, drs_chance: 0.08 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Legal balls a bowler may deliver (4 overs).
    pub quota_balls: u32,
    /// A bowler reaching this many wickets is taken off immediately.
    pub wicket_cap: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self { quota_balls: 24, wicket_cap: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub weights: WeightConfig,
    #[serde(default)]
    pub modifiers: ModifierConfig,
    #[serde(default)]
    pub twists: TwistConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
}

impl EngineConfig {
    /// Load from a JSON file and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        if w.safe.iter().chain(w.hard.iter()).any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ChaseError::InvalidConfig("base weights must be finite and >= 0".into()));
        }
        if !(w.jitter_low > 0.0 && w.jitter_low <= w.jitter_high) {
            return Err(ChaseError::InvalidConfig(format!(
                "jitter range must satisfy 0 < low <= high, got {}..{}",
                w.jitter_low, w.jitter_high
            )));
        }

        let m = &self.modifiers;
        if m.spam_streak == 0 || m.spam_streak > m.recent_actions_window {
            return Err(ChaseError::InvalidConfig(format!(
                "spam_streak must be 1..={}, got {}",
                m.recent_actions_window, m.spam_streak
            )));
        }
        if !(0.0..=1.0).contains(&m.collapse_wicket_scale) {
            return Err(ChaseError::InvalidConfig(format!(
                "collapse_wicket_scale must be 0.0-1.0, got {}",
                m.collapse_wicket_scale
            )));
        }

        let t = &self.twists;
        for (name, p) in [
            ("spam_penalty_chance", m.spam_penalty_chance),
            ("edge_chance", t.edge_chance),
            ("stunner_chance", t.stunner_chance),
            ("drs_chance", t.drs_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ChaseError::InvalidConfig(format!("{name} must be 0.0-1.0, got {p}")));
            }
        }

        if self.rotation.quota_balls == 0 {
            return Err(ChaseError::InvalidConfig("quota_balls must be > 0".into()));
        }
        Ok(())
    }
}
