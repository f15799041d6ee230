mod client;
mod config;
mod error;
mod exec;
mod harness;
mod probe;
mod report;
#[cfg(all(test, unix))]
mod tests;
mod types;

pub use client::DockerMcpClient;
pub use config::{Config, DEFAULT_CONTAINER, RuntimeCommand};
pub use error::{Error, Result};
pub use harness::run;
pub use report::Transcript;
pub use types::*;
