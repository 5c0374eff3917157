use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalkError>;

/// Everything that can stop a walk. Every variant names the url or lookup key
/// that could not be resolved.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Unable to decode {what}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{what} is not a JSON object")]
    NotAnObject { what: String },

    #[error("Invalid {what}: {reason}")]
    InvalidValue { what: String, reason: String },

    #[error("Expected exactly one {what} matching '{key}', found {matches}")]
    NotFound {
        what: &'static str,
        key: String,
        matches: usize,
    },

    #[error("Item index {index} is out of range for a page of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    NotFound,
    IndexOutOfRange,
}

impl WalkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Status { .. } => ErrorKind::Transport,
            Self::Decode { .. } | Self::NotAnObject { .. } | Self::InvalidValue { .. } => {
                ErrorKind::Decode
            }
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }

    pub(crate) fn not_found(what: &'static str, key: &str, matches: usize) -> Self {
        Self::NotFound {
            what,
            key: key.to_string(),
            matches,
        }
    }
}
