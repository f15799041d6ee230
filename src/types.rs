use crate::{Error, Result};
use rmcp::model::{
    CallToolRequestParam, ClientCapabilities, ClientInfo, Implementation, JsonObject,
    ProtocolVersion,
};
use serde::Serialize;
use serde_json::json;

pub const JSONRPC_VERSION: &str = "2.0";

pub const CLIENT_NAME: &str = "test-client";
pub const CLIENT_VERSION: &str = "1.0.0";

pub const SEARCH_TOOL: &str = "tavily-search";
pub const SEARCH_QUERY: &str = "Что такое LangChain?";

/// A JSON-RPC 2.0 request envelope.
///
/// Each request is written to a fresh server process, so `id` is never matched against a reply.
#[derive(Debug, Clone, Serialize)]
pub struct Request<P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: P,
}

impl<P: Serialize> Request<P> {
    pub fn new(id: u64, method: &'static str, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }

    /// Serializes the request as a single line of compact JSON, without the terminator.
    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn initialize_request(id: u64) -> Request<ClientInfo> {
    let params = ClientInfo {
        protocol_version: ProtocolVersion::V_2024_11_05,
        capabilities: ClientCapabilities::default(),
        client_info: Implementation {
            name: CLIENT_NAME.to_string(),
            version: CLIENT_VERSION.to_string(),
        },
    };
    Request::new(id, "initialize", params)
}

pub fn list_tools_request(id: u64) -> Request<JsonObject> {
    Request::new(id, "tools/list", JsonObject::new())
}

pub fn search_request(id: u64) -> Request<CallToolRequestParam> {
    let arguments = json!({
        "query": SEARCH_QUERY,
        "search_depth": "basic",
        "topic": "general",
        "max_results": 5,
    });
    let params = CallToolRequestParam {
        name: SEARCH_TOOL.into(),
        arguments: arguments.as_object().cloned(),
    };
    Request::new(id, "tools/call", params)
}

/// What came back from one send round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The process exited in time; both streams may be empty.
    Completed { stdout: String, stderr: String },
    /// The process was killed after exceeding the timeout.
    TimedOut,
    /// Spawning, writing or waiting failed.
    Failed(String),
}

impl SendOutcome {
    pub const TIMEOUT_MARKER: &'static str = "Timeout";

    pub fn stdout(&self) -> Option<&str> {
        match self {
            Self::Completed { stdout, .. } => Some(stdout),
            _ => None,
        }
    }

    pub fn stderr(&self) -> &str {
        match self {
            Self::Completed { stderr, .. } => stderr,
            Self::TimedOut => Self::TIMEOUT_MARKER,
            Self::Failed(message) => message,
        }
    }

    /// Returns the outcome as an `(stdout, stderr)` pair.
    pub fn into_pair(self) -> (Option<String>, String) {
        match self {
            Self::Completed { stdout, stderr } => (Some(stdout), stderr),
            Self::TimedOut => (None, Self::TIMEOUT_MARKER.to_string()),
            Self::Failed(message) => (None, message),
        }
    }

    /// A response counts as received when the server printed anything at all.
    pub fn has_response(&self) -> bool {
        self.stdout().is_some_and(|stdout| !stdout.is_empty())
    }
}

impl From<Result<(String, String)>> for SendOutcome {
    fn from(result: Result<(String, String)>) -> Self {
        match result {
            Ok((stdout, stderr)) => Self::Completed { stdout, stderr },
            Err(Error::Timeout(_)) => Self::TimedOut,
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// A request together with the outcome of sending it.
#[derive(Debug, Clone)]
pub struct Exchange<P> {
    pub request: Request<P>,
    pub outcome: SendOutcome,
}
