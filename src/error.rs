use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Spawning, writing to or waiting on the runtime command failed.
    ///
    /// Displayed as the bare io error so it can be echoed as stderr text.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("command did not finish within {0:?}")]
    Timeout(Duration),

    #[error("child process has no {0} handle")]
    MissingPipe(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
