use crate::{Error, Request, SendOutcome};
use serde::Serialize;
use std::io::{self, Write};

const SEPARATOR_WIDTH: usize = 50;

/// Human readable console transcript of a probe run.
pub struct Transcript<W> {
    out: W,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== Testing MCP server over docker exec ===")?;
        writeln!(self.out)
    }

    pub fn container_running(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "✅ Container {name} is running")
    }

    pub fn container_missing(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "❌ Container {name} is not running")?;
        writeln!(self.out, "Start it with: docker-compose up -d")
    }

    pub fn probe_failed(&mut self, err: &Error) -> io::Result<()> {
        writeln!(self.out, "❌ Failed to check container: {err}")
    }

    /// Starts the numbered section for one test.
    pub fn section(&mut self, number: usize, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.out)?;
        writeln!(self.out, "{number}. {title}:")
    }

    /// Announces a request before it is sent, flushing so it shows up while the send is pending.
    pub fn sending<P: Serialize>(
        &mut self,
        container: &str,
        request: &Request<P>,
    ) -> io::Result<()> {
        let line = match request.to_line() {
            Ok(line) => line,
            Err(err) => format!("<{err}>"),
        };
        writeln!(self.out, "📤 Sending message to container {container}")?;
        writeln!(self.out, "Message: {line}")?;
        self.out.flush()
    }

    pub fn outcome(&mut self, outcome: &SendOutcome) -> io::Result<()> {
        match outcome {
            SendOutcome::Completed { stdout, stderr } => {
                writeln!(self.out, "STDOUT: {stdout}")?;
                writeln!(self.out, "STDERR: {stderr}")?;
            }
            SendOutcome::TimedOut => {
                writeln!(self.out, "❌ Timed out waiting for the command")?;
            }
            SendOutcome::Failed(message) => {
                writeln!(self.out, "❌ Execution failed: {message}")?;
            }
        }

        match outcome.stdout() {
            Some(stdout) if outcome.has_response() => writeln!(self.out, "✅ Response: {stdout}"),
            _ => writeln!(self.out, "❌ Error: {}", outcome.stderr()),
        }
    }
}
