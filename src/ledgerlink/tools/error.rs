use std::path::PathBuf;

use thiserror::Error;

use crate::ledgerlink::tools::model::Fault;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool talks to the accounting service or decodes its responses.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading configuration or report files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON decoding or encoding fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network, DNS or TLS failures surfaced by the HTTP client.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failures raised by non-HTTP request executors.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered a read request with a non-success status.
    #[error("got status code {status}")]
    Status { status: u16 },

    /// The service rejected a write request and described why.
    #[error("got status code {status}: {fault}")]
    Fault { status: u16, fault: Fault },

    /// A name lookup matched nothing.
    #[error("no {entity} named '{name}'")]
    NotFound { entity: String, name: String },

    /// A name lookup matched more than one record.
    #[error("{count} {entity} records named '{name}'")]
    AmbiguousMatch {
        entity: String,
        name: String,
        count: usize,
    },

    /// Raised when a zero page size is requested.
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    /// Raised when the configured endpoint is not a valid base URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Raised when a path segment would be read as `.` or `..` by the URL
    /// resolver and so address a different resource.
    #[error("invalid path segment: '{0}'")]
    InvalidPathSegment(String),

    /// Raised when the configuration file cannot be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ToolError {
    /// Status code carried by protocol failures, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ToolError::Status { status } | ToolError::Fault { status, .. } => Some(*status),
            _ => None,
        }
    }
}
