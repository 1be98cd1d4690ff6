use std::{env, fs};

use crate::engine::EngineConfig;

pub const ENGINE_CONFIG_ENV: &str = "CHASE_ENGINE_CONFIG";

/// Engine config named by `CHASE_ENGINE_CONFIG`, or the default when the
/// variable is unset or blank.
pub(crate) fn engine_config_from_env() -> Result<EngineConfig, String> {
    let Ok(path) = env::var(ENGINE_CONFIG_ENV) else {
        return Ok(EngineConfig::default());
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(EngineConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read engine config from {ENGINE_CONFIG_ENV}='{path}': {e}"))?;

    EngineConfig::from_json(&content)
        .map_err(|e| format!("Invalid engine config from {ENGINE_CONFIG_ENV}='{path}': {e}"))
}
