pub mod json_api;

mod config_env;

pub use config_env::ENGINE_CONFIG_ENV;
pub use json_api::{
    error_codes, play_ball_json, player_of_the_match_json, start_match_json, PlayBallRequest,
    PotmRequest, StartMatchRequest, SCHEMA_VERSION,
};
