use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlineError {
    /// The base API URL, the pinned certificate, or a response body
    /// could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The server answered with a status code other than the one the
    /// operation expects.
    #[error("{operation} failed with status {status}")]
    Server {
        operation: &'static str,
        status: u16,
    },

    /// DNS resolution, connection establishment, TLS handshake, or the
    /// read/write of the round trip failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl OutlineError {
    /// The HTTP status carried by a [`OutlineError::Server`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            OutlineError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OutlineError>;
