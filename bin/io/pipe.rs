use super::Io;
use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::instrument;

/// A generic [`Io`] interface over a pair of byte streams.
#[derive(Debug)]
pub struct Pipe<W: AsyncWrite, R: AsyncRead> {
    writer: W,
    reader: BufReader<R>,
}

impl<W: AsyncWrite, R: AsyncRead> Pipe<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Pipe {
            writer,
            reader: BufReader::new(reader),
        }
    }
}

impl<W: AsyncWrite, R: AsyncRead> From<(W, R)> for Pipe<W, R> {
    fn from((writer, reader): (W, R)) -> Self {
        Pipe::new(writer, reader)
    }
}

#[async_trait]
impl<W: AsyncWrite + Send + Unpin, R: AsyncRead + Send + Unpin> Io for Pipe<W, R> {
    /// Skips blank lines, the board emits them between events.
    ///
    /// Bytes that are not valid UTF-8 are replaced by `U+FFFD`.
    #[instrument(level = "trace", skip(self), ret, err)]
    async fn recv(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf).await? == 0 {
                break Err(io::ErrorKind::UnexpectedEof.into());
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\r', '\n']);
            if !line.trim().is_empty() {
                break Ok(line.to_owned());
            }
        }
    }

    #[instrument(level = "trace", skip(self), err)]
    async fn send(&mut self, msg: &str) -> io::Result<()> {
        self.writer.write_all(msg.as_bytes()).await?;
        self.writer.write_u8(b'\n').await?;
        Ok(())
    }

    #[instrument(level = "trace", skip(self), err)]
    async fn flush(&mut self) -> io::Result<()> {
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str;
    use test_strategy::proptest;
    use tokio::io::{duplex, AsyncReadExt};
    use tokio::runtime;

    #[proptest]
    fn recv_waits_for_line_break(#[strategy("\\S+")] s: String) {
        let rt = runtime::Builder::new_multi_thread().build()?;

        let (writer, _) = duplex(1);
        let (mut tx, reader) = duplex(s.len() + 1);

        rt.block_on(tx.write_all(s.as_bytes()))?;
        rt.block_on(tx.write_u8(b'\n'))?;

        let mut pipe = Pipe::new(writer, reader);
        assert_eq!(rt.block_on(pipe.recv())?, s);
    }

    #[proptest]
    fn recv_skips_blank_lines(#[strategy("[A-Z]{1,8}")] s: String) {
        let rt = runtime::Builder::new_multi_thread().build()?;

        let (writer, _) = duplex(1);
        let (mut tx, reader) = duplex(s.len() + 8);

        rt.block_on(tx.write_all(format!("\n \r\n{s}\n").as_bytes()))?;

        let mut pipe = Pipe::new(writer, reader);
        assert_eq!(rt.block_on(pipe.recv())?, s);
    }

    #[test]
    fn recv_replaces_invalid_utf8() {
        let rt = runtime::Builder::new_current_thread().build().unwrap();

        let (writer, _) = duplex(1);
        let (mut tx, reader) = duplex(32);

        let mut pipe = Pipe::new(writer, reader);
        let lines = rt.block_on(async {
            tx.write_all(b"\xff\xfe\r\nPLACE:P1:a1\n").await?;
            Ok::<_, io::Error>((pipe.recv().await?, pipe.recv().await?))
        });

        assert_eq!(
            lines.unwrap(),
            ("\u{FFFD}\u{FFFD}".into(), "PLACE:P1:a1".into())
        );
    }

    #[test]
    fn recv_returns_the_last_line_without_line_break() {
        let rt = runtime::Builder::new_current_thread().build().unwrap();

        let (writer, _) = duplex(1);
        let (mut tx, reader) = duplex(16);

        rt.block_on(tx.write_all(b"LIFT:P1:a1")).unwrap();
        drop(tx);

        let mut pipe = Pipe::new(writer, reader);
        assert_eq!(rt.block_on(pipe.recv()).unwrap(), "LIFT:P1:a1");
    }

    #[test]
    fn recv_fails_at_end_of_stream() {
        let rt = runtime::Builder::new_current_thread().build().unwrap();

        let (writer, _) = duplex(1);
        let (tx, reader) = duplex(1);
        drop(tx);

        let mut pipe = Pipe::new(writer, reader);
        let error = rt.block_on(pipe.recv()).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let rt = runtime::Builder::new_multi_thread().build()?;

        let (writer, mut rx) = duplex(s.len() + 1);
        let (_, reader) = duplex(1);

        let expected = format!("{s}\n");

        let mut pipe = Pipe::new(writer, reader);
        rt.block_on(pipe.send(&s))?;
        rt.block_on(pipe.flush())?;

        let mut buf = vec![0u8; expected.len()];
        rt.block_on(rx.read_exact(&mut buf))?;

        assert_eq!(str::from_utf8(&buf)?, expected);
    }
}
