use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoutError>;

#[derive(Debug, Error)]
pub enum ScoutError {
    /// Timeout, DNS failure, refused/reset connection or an unreadable body.
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid proxy: {0}")]
    InvalidProxy(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("pipeline deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

impl ScoutError {
    pub fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        ScoutError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ScoutError::Transport { .. })
    }
}
