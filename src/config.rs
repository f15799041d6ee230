use std::time::Duration;

/// Container the MCP server is expected to run in when nothing else is given.
pub const DEFAULT_CONTAINER: &str = "tavily_server";

/// How to invoke the container runtime CLI.
///
/// `args` are placed before the sub-command, so `sh fake-docker.sh` can stand in for `docker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl RuntimeCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub(crate) fn command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl Default for RuntimeCommand {
    fn default() -> Self {
        Self::new("docker")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the running container, matched as a substring by the probe
    pub container_name: String,

    /// Container runtime CLI
    pub runtime: RuntimeCommand,

    /// Server command executed inside the container for every message
    pub entrypoint: Vec<String>,

    /// Upper bound for a single runtime invocation
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_name: DEFAULT_CONTAINER.to_string(),
            runtime: RuntimeCommand::default(),
            entrypoint: vec!["node".to_string(), "build/index.js".to_string()],
            timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_name(mut self, name: impl Into<String>) -> Self {
        self.container_name = name.into();
        self
    }

    pub fn with_runtime(mut self, runtime: RuntimeCommand) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn with_entrypoint<I, S>(mut self, entrypoint: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entrypoint = entrypoint.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
