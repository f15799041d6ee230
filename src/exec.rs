//! A single send round trip against a fresh `<runtime> exec -i` process.

use crate::{Config, Error, Result};
use std::{io::ErrorKind, process::Stdio};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};

/// Runs the server entry point inside the container, writes `line` plus a newline to its stdin,
/// and returns the captured `(stdout, stderr)`.
///
/// If the process outlives `config.timeout` it is killed and reaped before
/// [`Error::Timeout`] is returned.
pub(crate) async fn exchange(config: &Config, line: &str) -> Result<(String, String)> {
    let mut cmd = config.runtime.command();
    cmd.arg("exec")
        .arg("-i")
        .arg(&config.container_name)
        .args(&config.entrypoint)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!(command = ?cmd.as_std(), "spawning exec");
    let mut child = cmd.spawn()?;

    let mut stdin = child.stdin.take().ok_or(Error::MissingPipe("stdin"))?;
    let stdout = child.stdout.take().ok_or(Error::MissingPipe("stdout"))?;
    let stderr = child.stderr.take().ok_or(Error::MissingPipe("stderr"))?;

    let payload = format!("{line}\n");
    let write = async move {
        match stdin.write_all(payload.as_bytes()).await {
            Err(err) if err.kind() == ErrorKind::BrokenPipe => {
                tracing::debug!("server closed stdin before reading the request");
            }
            other => other?,
        }
        // dropping stdin closes it
        Ok::<_, std::io::Error>(())
    };
    let round_trip = async {
        let ((), status, stdout, stderr) = tokio::try_join!(
            write,
            child.wait(),
            read_text(stdout),
            read_text(stderr)
        )?;
        tracing::debug!(%status, "exec finished");
        Ok::<_, Error>((stdout, stderr))
    };

    let finished = tokio::time::timeout(config.timeout, round_trip).await;
    match finished {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout = ?config.timeout, "exec timed out, killing it");
            if let Err(err) = child.kill().await {
                tracing::warn!(%err, "failed to kill timed out exec");
            }
            Err(Error::Timeout(config.timeout))
        }
    }
}

async fn read_text(mut stream: impl AsyncRead + Unpin) -> std::io::Result<String> {
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
