use super::Session;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::session::{Config, Engine};
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Replays a log of recorded board events and prints the final board.
#[derive(Debug, Parser)]
pub struct Replay {
    #[clap(flatten)]
    session: Session,

    /// A file with one event per line, `#` starts a comment.
    log: PathBuf,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let config = self.session.config().await?;

        let log = fs::read_to_string(&self.log)
            .await
            .with_context(|| format!("failed to read `{}`", self.log.display()))?;

        let engine = replay(config, &log);
        println!("{}", engine.view());

        Ok(())
    }
}

/// Feeds every event in `log` to a fresh [`Engine`].
fn replay(config: Config, log: &str) -> Engine {
    let mut engine = config.build();
    let (mut accepted, mut rejected) = (0usize, 0usize);

    let events = log
        .lines()
        .enumerate()
        .map(|(n, l)| (n + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    for (line, event) in events {
        let response = engine.handle_line(event);
        if response.is_valid() {
            accepted += 1;
            info!(line, %event, "{}", response);
        } else {
            rejected += 1;
            warn!(line, %event, "{}", response);
        }
    }

    info!(accepted, rejected, "replay finished");
    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::rules::Variant;

    #[test]
    fn replay_skips_comments_and_blank_lines() {
        let log = "# opening\n\nPLACE:7A74B701:b2\n  \nPLACE:CE890E02:a3\n# capture\nMOVE:7A74B701:b2:a3\n";
        let engine = replay(Config::default(), log);

        assert_eq!(engine.view().to_string(), "....\nP...\n....\n....");
        assert_eq!(engine.piece("CE890E02"), None);
    }

    #[test]
    fn replay_carries_on_after_rejected_events() {
        let log = "LIFT:P1:a1\nHELLO\nPLACE:P1:a1\n";
        let engine = replay(Config::default(), log);
        assert_eq!(engine.occupant_at("a1").map(|p| p.id.as_str()), Some("P1"));
    }

    #[test]
    fn replay_plays_the_configured_game() {
        let config = Config {
            variant: Variant::Checkers,
            ..Config::default()
        };

        let log = "PLACE:C5B7BD01:b2\nMOVE:C5B7BD01:b2:a3\nMOVE:C5B7BD01:a3:b2\n";
        let engine = replay(config, log);
        assert_eq!(
            engine.occupant_at("a3").map(|p| p.id.as_str()),
            Some("C5B7BD01")
        );
    }
}
