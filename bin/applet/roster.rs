use anyhow::Error as Anyhow;
use clap::Parser;
use lib::rules::{Rules, Variant};
use tracing::instrument;

/// Prints the built-in roster of a game as RON, a starting point for custom rosters.
#[derive(Debug, Parser)]
pub struct Roster {
    /// The game whose roster to print, either `chess` or `checkers`.
    #[clap(short, long, default_value_t)]
    game: Variant,
}

impl Roster {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        println!("{}", self.game.rules().roster());
        Ok(())
    }
}
