use thiserror::Error;

/// Top-level error type for Stargazer.
#[derive(Debug, Error)]
pub enum StargazerError {
    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Translation backend failed.
    #[error("translate error: {0}")]
    Translate(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

/// Failure of a single upstream GET.
///
/// Every space-data endpoint reports through this one type, so handlers
/// treat a bad status, a dropped connection, and a malformed body alike.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with something other than 200.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Connection, TLS, or timeout failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Body was not JSON or lacked a required field.
    #[error("malformed body: {0}")]
    Decode(String),
}
