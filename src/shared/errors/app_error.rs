use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    /// Network failure or non-2xx response. `status` is absent when the
    /// request never reached the server (connect error, timeout).
    #[error("Transport error: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The torrent index answered 200 but its envelope carries
    /// `status != "ok"`; the upstream-provided message is surfaced as-is.
    #[error("Upstream rejected request: {0}")]
    UpstreamStatus(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        AppError::Transport {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by a transport error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::transport(None, "Request timeout")
        } else if err.is_connect() {
            AppError::transport(None, "Failed to connect to upstream service")
        } else if let Some(status) = err.status() {
            AppError::transport(Some(status.as_u16()), err.to_string())
        } else {
            AppError::transport(None, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidResponse(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
