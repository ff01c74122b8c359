use super::Session;
use crate::io::{Device, Io, Pipe};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::rules::Rules;
use lib::session::Engine;
use std::{io::ErrorKind, path::PathBuf};
use tokio::io::{stdin, stdout};
use tracing::{debug, info, instrument, warn};

/// Runs a game session driven by the sensor board.
#[derive(Debug, Parser)]
pub struct Serve {
    #[clap(flatten)]
    session: Session,

    /// The serial device the board is attached to, or `-` for the standard streams.
    #[clap(default_value = "-")]
    device: PathBuf,
}

impl Default for Serve {
    fn default() -> Self {
        Serve {
            session: Session::default(),
            device: PathBuf::from("-"),
        }
    }
}

impl Serve {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let engine = self.session.config().await?.build();

        info!(
            game = engine.rules().name(),
            rows = engine.topology().rows(),
            cols = engine.topology().cols(),
            "session started"
        );

        if self.device.as_os_str() == "-" {
            Server::new(Pipe::new(stdout(), stdin()), engine).run().await
        } else {
            let device = Device::open(&self.device)
                .await
                .with_context(|| format!("failed to open `{}`", self.device.display()))?;

            Server::new(device, engine).run().await
        }
    }
}

/// Feeds events read from the board to the [`Engine`] and reports rejections back.
struct Server<T: Io> {
    io: T,
    engine: Engine,
}

impl<T: Io> Server<T> {
    fn new(io: T, engine: Engine) -> Self {
        Server { io, engine }
    }

    async fn run(&mut self) -> Result<(), Anyhow> {
        loop {
            let line = match self.io.recv().await {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break Ok(()),
                Err(e) => return Err(e).context("lost connection to the board"),
            };

            debug!(%line, "received");
            let response = self.engine.handle_line(&line);

            if response.is_valid() {
                info!(highlight = ?response.highlight(), "{}", response);
            } else {
                warn!(highlight = ?response.highlight(), "{}", response);
            }

            debug!(board = %self.engine.view());

            if let Some(command) = response.command() {
                self.io.send(&command.to_string()).await?;
                self.io.flush().await?;
            }
        }
    }
}
