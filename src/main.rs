use clap::Parser;
use docker_mcp_probe::{Config, DEFAULT_CONTAINER, RuntimeCommand};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sends initialize, tools/list and tools/call to an MCP server running in a container.
#[derive(Debug, Parser)]
#[command(name = "docker-mcp-probe", version)]
struct Cli {
    /// Name of the running container
    #[arg(long, default_value = DEFAULT_CONTAINER)]
    container: String,

    /// Container runtime CLI
    #[arg(long, default_value = "docker")]
    runtime: String,

    /// Seconds to wait for each runtime invocation
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Server command run inside the container (default: node build/index.js)
    #[arg(last = true)]
    entrypoint: Vec<String>,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new()
            .with_container_name(self.container)
            .with_runtime(RuntimeCommand::new(self.runtime))
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if !self.entrypoint.is_empty() {
            config = config.with_entrypoint(self.entrypoint);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("warn,{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Cli::parse().into_config();
    tracing::debug!(?config, "starting probe");

    docker_mcp_probe::run(config, std::io::stdout().lock()).await?;
    Ok(())
}
