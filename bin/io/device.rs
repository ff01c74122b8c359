use super::{Io, Pipe};
use async_trait::async_trait;
use std::{io, path::Path};
use tokio::fs::{File, OpenOptions};
use tokio::io::{split, ReadHalf, WriteHalf};
use tracing::instrument;

/// An [`Io`] interface for the serial device the sensor board is attached to.
///
/// The line discipline, e.g. the baud rate, is expected to be configured beforehand,
/// for instance with `stty -F <device> 115200 raw`.
#[derive(Debug)]
pub struct Device {
    pipe: Pipe<WriteHalf<File>, ReadHalf<File>>,
}

impl Device {
    /// Opens the device for reading and writing.
    #[instrument(level = "trace", err)]
    pub async fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path).await?;
        let (reader, writer) = split(file);

        Ok(Device {
            pipe: Pipe::new(writer, reader),
        })
    }
}

#[async_trait]
impl Io for Device {
    async fn recv(&mut self) -> io::Result<String> {
        self.pipe.recv().await
    }

    async fn send(&mut self, msg: &str) -> io::Result<()> {
        self.pipe.send(msg).await
    }

    async fn flush(&mut self) -> io::Result<()> {
        self.pipe.flush().await
    }
}
