use crate::{
    Config, Exchange, Request, Result, SendOutcome, exec, probe,
    types::{initialize_request, list_tools_request, search_request},
};
use rmcp::model::{CallToolRequestParam, ClientInfo, JsonObject};
use serde::Serialize;

/// Talks to an MCP server inside a container, one fresh `exec` process per message.
///
/// No session survives between calls: `initialize` is not remembered by the process that later
/// receives `tools/list`.
#[derive(Debug)]
pub struct DockerMcpClient {
    config: Config,
    next_id: u64,
}

impl DockerMcpClient {
    pub fn new(config: Config) -> Self {
        Self { config, next_id: 1 }
    }

    pub fn container_name(&self) -> &str {
        &self.config.container_name
    }

    /// The id the next request will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Probes the runtime for the container, propagating probe failures.
    pub async fn probe(&self) -> Result<bool> {
        probe::container_running(&self.config).await
    }

    /// Probes the runtime for the container. Failing to run the probe counts as not running.
    pub async fn check_container_running(&self) -> bool {
        match self.probe().await {
            Ok(running) => running,
            Err(err) => {
                tracing::warn!(%err, container = %self.config.container_name, "container probe failed");
                false
            }
        }
    }

    /// Sends one request to a fresh server process and captures what it printed.
    pub async fn send<P: Serialize>(&self, request: &Request<P>) -> SendOutcome {
        let result = match request.to_line() {
            Ok(line) => exec::exchange(&self.config, &line).await,
            Err(err) => Err(err),
        };
        SendOutcome::from(result)
    }

    pub async fn test_initialize(&mut self) -> Exchange<ClientInfo> {
        let request = self.initialize_request();
        self.exchange(request).await
    }

    pub async fn test_list_tools(&mut self) -> Exchange<JsonObject> {
        let request = self.list_tools_request();
        self.exchange(request).await
    }

    pub async fn test_search(&mut self) -> Exchange<CallToolRequestParam> {
        let request = self.search_request();
        self.exchange(request).await
    }

    /// Builds the next `initialize` request, consuming an id.
    pub fn initialize_request(&mut self) -> Request<ClientInfo> {
        initialize_request(self.take_id())
    }

    pub fn list_tools_request(&mut self) -> Request<JsonObject> {
        list_tools_request(self.take_id())
    }

    pub fn search_request(&mut self) -> Request<CallToolRequestParam> {
        search_request(self.take_id())
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    async fn exchange<P: Serialize>(&self, request: Request<P>) -> Exchange<P> {
        let outcome = self.send(&request).await;
        Exchange { request, outcome }
    }
}
