//! Ball Resolution Engine.
//!
//! One call to [`play_ball`] turns match state N into state N+1. Each step
//! of the resolution lives in its own module and can be tested alone.

pub mod ball;
pub mod commentary;
pub mod commit;
pub mod config;
pub mod context;
pub mod modifiers;
pub mod rng;
pub mod rotation;
pub mod sampling;
pub mod termination;
pub mod twists;
pub mod weights;

pub use ball::{play_ball, play_ball_with_config, resolve_ball};
pub use config::{EngineConfig, ModifierConfig, RotationConfig, TwistConfig, WeightConfig};
pub use context::{BallContext, RRR_SENTINEL};
pub use rng::{ConstantSource, RandomSource, ScriptedSource};
pub use weights::OutcomeWeights;
