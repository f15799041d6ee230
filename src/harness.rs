use crate::{Config, DockerMcpClient, Transcript};
use std::io::{self, Write};

/// Probes the container, then sends `initialize`, `tools/list` and `tools/call` in that order,
/// writing a transcript to `out`.
///
/// A failed send never stops the following ones. Only writing the transcript can fail.
pub async fn run<W: Write>(config: Config, out: W) -> io::Result<()> {
    let mut client = DockerMcpClient::new(config);
    let mut transcript = Transcript::new(out);
    let container = client.container_name().to_string();

    transcript.banner()?;

    match client.probe().await {
        Ok(true) => transcript.container_running(&container)?,
        Ok(false) => {
            tracing::info!(%container, "container is not running, nothing sent");
            return transcript.container_missing(&container);
        }
        Err(err) => {
            tracing::warn!(%err, %container, "container probe failed");
            return transcript.probe_failed(&err);
        }
    }

    transcript.section(1, "Initialize")?;
    let request = client.initialize_request();
    transcript.sending(&container, &request)?;
    transcript.outcome(&client.send(&request).await)?;

    transcript.section(2, "List tools")?;
    let request = client.list_tools_request();
    transcript.sending(&container, &request)?;
    transcript.outcome(&client.send(&request).await)?;

    transcript.section(3, "Search")?;
    let request = client.search_request();
    transcript.sending(&container, &request)?;
    transcript.outcome(&client.send(&request).await)?;

    transcript.into_inner().flush()
}
