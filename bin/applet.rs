use anyhow::{Context, Error as Anyhow};
use clap::{Args, Subcommand};
use derive_more::From;
use lib::{board::Preset, rules, rules::Variant, session::Config};
use std::path::PathBuf;
use tokio::fs;
use tracing::instrument;

mod replay;
mod roster;
mod serve;

#[derive(From, Subcommand)]
pub enum Applet {
    Serve(serve::Serve),
    Replay(replay::Replay),
    Roster(roster::Roster),
}

impl Default for Applet {
    fn default() -> Self {
        serve::Serve::default().into()
    }
}

impl Applet {
    pub async fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Serve(a) => Ok(a.execute().await?),
            Applet::Replay(a) => Ok(a.execute().await?),
            Applet::Roster(a) => Ok(a.execute().await?),
        }
    }
}

/// Options of applets that run a game session.
#[derive(Debug, Default, Args)]
pub struct Session {
    /// The board size, either `4x4` or `8x8`.
    #[clap(short, long, default_value_t)]
    size: Preset,

    /// The game to play, either `chess` or `checkers`.
    #[clap(short, long, default_value_t)]
    game: Variant,

    /// A RON file that maps piece ids to their kind and color.
    #[clap(short, long, value_name = "FILE")]
    roster: Option<PathBuf>,
}

impl Session {
    /// Resolves the session [`Config`], loading the roster file if one was given.
    #[instrument(level = "trace", err)]
    pub async fn config(self) -> Result<Config, Anyhow> {
        let roster = match &self.roster {
            None => None,
            Some(path) => {
                let ron = fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read `{}`", path.display()))?;

                let roster = ron
                    .parse::<rules::Roster>()
                    .with_context(|| format!("invalid roster in `{}`", path.display()))?;

                Some(roster)
            }
        };

        Ok(Config {
            preset: self.size,
            variant: self.game,
            roster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, process};
    use tokio::runtime;

    fn scratch(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("tabletop-{}-{name}", process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn session_without_roster_uses_the_built_in_one() {
        let rt = runtime::Builder::new_current_thread().build().unwrap();
        let config = rt.block_on(Session::default().config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn session_loads_roster_from_file() {
        let path = scratch("roster.ron", r#"{ "04A1B2C3": (kind: King, color: White) }"#);
        let session = Session {
            roster: Some(path.clone()),
            ..Session::default()
        };

        let rt = runtime::Builder::new_current_thread().build().unwrap();
        let config = rt.block_on(session.config()).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(config.roster.map(|r| r.len()), Some(1));
    }

    #[test]
    fn session_fails_on_malformed_roster() {
        let path = scratch("malformed.ron", "{ 04A1B2C3: King }");
        let session = Session {
            roster: Some(path.clone()),
            ..Session::default()
        };

        let rt = runtime::Builder::new_current_thread().build().unwrap();
        let result = rt.block_on(session.config());
        std::fs::remove_file(path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn session_fails_on_missing_roster() {
        let session = Session {
            roster: Some(PathBuf::from("/nonexistent/roster.ron")),
            ..Session::default()
        };

        let rt = runtime::Builder::new_current_thread().build().unwrap();
        assert!(rt.block_on(session.config()).is_err());
    }
}
