use crate::{Config, Error, Result};

/// Lists running containers filtered by name and reports whether the name shows up in the output.
///
/// This is a plain substring match, so `tavily_server` also matches `tavily_server_old`.
pub(crate) async fn container_running(config: &Config) -> Result<bool> {
    let mut cmd = config.runtime.command();
    cmd.arg("ps")
        .arg("--filter")
        .arg(format!("name={}", config.container_name))
        .kill_on_drop(true);

    tracing::debug!(command = ?cmd.as_std(), "probing container");
    let output = tokio::time::timeout(config.timeout, cmd.output())
        .await
        .map_err(|_| Error::Timeout(config.timeout))??;

    if !output.status.success() {
        tracing::debug!(status = %output.status, "container listing exited unsuccessfully");
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    Ok(listing.contains(config.container_name.as_str()))
}
