use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use chase_core::models::{MatchState, RiskAction};
use chase_core::RandomSource;
use clap::ValueEnum;

/// Who picks the risk level for each ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Prompt on stdin for every ball
    Interactive,
    Safe,
    Hard,
    /// Safe, hard, safe, ...
    Alternate,
    /// Coin flip per ball
    Random,
}

impl Strategy {
    /// `None` when the user quits.
    pub fn choose(
        &self,
        state: &MatchState,
        rng: &mut impl RandomSource,
    ) -> Result<Option<RiskAction>> {
        let action = match self {
            Strategy::Interactive => return prompt(),
            Strategy::Safe => RiskAction::Safe,
            Strategy::Hard => RiskAction::Hard,
            Strategy::Alternate if state.balls_bowled % 2 == 0 => RiskAction::Safe,
            Strategy::Alternate => RiskAction::Hard,
            Strategy::Random if rng.chance(0.5) => RiskAction::Hard,
            Strategy::Random => RiskAction::Safe,
        };
        Ok(Some(action))
    }
}

fn prompt() -> Result<Option<RiskAction>> {
    let stdin = io::stdin();
    loop {
        print!("[s]afe / [h]ard / [q]uit > ");
        io::stdout().flush().context("flush stdout")?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context("read action from stdin")?;
        if read == 0 {
            bail!("stdin closed before the chase finished");
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match input.parse::<RiskAction>() {
            Ok(action) => return Ok(Some(action)),
            Err(_) => println!("Unknown choice '{input}'."),
        }
    }
}
