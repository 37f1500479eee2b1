use std::path::PathBuf;
use thiserror::Error;

/// Problems with the monitor's configuration, detected before any network activity
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required secret is unset or empty
    #[error("missing required setting {0}")]
    MissingSetting(&'static str),

    /// The content-region selector could not be parsed
    #[error("invalid region selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A keyword could not be compiled into a matcher
    #[error("invalid keyword pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The configured site origin is not a valid URL
    #[error("invalid site origin: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configuration file could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for `MonitorConfig`
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to retrieve the monitored page
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport, TLS, or timeout failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Failure to read or write the stored snapshot
#[derive(Error, Debug)]
pub enum StateError {
    #[error("failed to read state file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("state file {path:?} is corrupt: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write state file {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure to deliver a notification on the primary channel
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Delivery refused by a transport that is not SMTP-backed
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

/// Terminal error kinds of a monitoring run
#[derive(Error, Debug)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("notification error: {0}")]
    Notification(#[from] NotificationError),

    #[error("state write error: {0}")]
    StateWrite(#[from] StateError),
}

impl RunError {
    /// Process exit code reported for this error kind
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Configuration(_) => 2,
            RunError::Fetch(_) => 3,
            RunError::Notification(_) => 4,
            RunError::StateWrite(_) => 5,
        }
    }
}
