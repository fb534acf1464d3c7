//! # Trip view errors

use thiserror::Error;

/// Failures of the upstream fetch. The core itself cannot fail: bad data
/// degrades to an unknown status or an omitted field instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("code: invalid_url, description: {0}")]
    InvalidUrl(String),

    #[error("code: transport, description: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("code: upstream_status, description: upstream responded with {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("code: invalid_format, description: failed to deserialize trip: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("code: no_data, description: no trip data for {0}")]
    NoData(String),
}

impl Error {
    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> &str {
        match self {
            Self::InvalidUrl(_) => "invalid_url",
            Self::Transport(_) => "transport",
            Self::UpstreamStatus(_) => "upstream_status",
            Self::InvalidFormat(_) => "invalid_format",
            Self::NoData(_) => "no_data",
        }
    }
}

/// Result type for upstream operations.
pub type Result<T> = std::result::Result<T, Error>;
