//! Tests that drive the client against a scripted stand-in for the container runtime.
//!
//! The fake runtime is a shell script run through `sh`, so it receives the same
//! `ps ...` / `exec -i ...` arguments the real CLI would.

mod requests;

use crate::{Config, RuntimeCommand};
use std::{io, path::PathBuf, time::Duration};
use tempfile::TempDir;

/// A runtime that reports `tavily_server` as running and answers every exec with a fixed reply.
///
/// Every invocation is appended to `calls.log`; every stdin line received by exec to `stdin.log`.
pub const HEALTHY_RUNTIME: &str = r#"
dir="$(dirname "$0")"
echo "$*" >> "$dir/calls.log"
case "$1" in
  ps)
    printf 'CONTAINER ID   IMAGE    NAMES\n3f2a9c1d   tavily   tavily_server\n'
    ;;
  exec)
    IFS= read -r line
    printf '%s\n' "$line" >> "$dir/stdin.log"
    printf '{"jsonrpc":"2.0","id":1,"result":{}}'
    ;;
esac
"#;

/// A runtime with no containers at all.
pub const EMPTY_RUNTIME: &str = r#"
dir="$(dirname "$0")"
echo "$*" >> "$dir/calls.log"
case "$1" in
  ps)
    printf 'CONTAINER ID   IMAGE    NAMES\n'
    ;;
esac
"#;

/// Manages a temporary directory holding a fake runtime script
pub struct TestContext {
    root: PathBuf,
    _temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> io::Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().into();

        Ok(Self {
            root,
            _temp_dir: temp_dir,
        })
    }

    /// Writes `script` as the fake runtime and returns a config that uses it.
    pub fn config(&self, script: &str) -> io::Result<Config> {
        let path = self.root.join("runtime.sh");
        std::fs::write(&path, script)?;

        let runtime = RuntimeCommand::new("sh").with_arg(path.to_string_lossy());
        Ok(Config::new()
            .with_runtime(runtime)
            .with_timeout(Duration::from_secs(5)))
    }

    /// Lines of a log file the fake runtime wrote, empty if it never wrote one.
    pub fn log(&self, name: &str) -> Vec<String> {
        std::fs::read_to_string(self.root.join(name))
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn read(&self, name: &str) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(name))
    }
}
