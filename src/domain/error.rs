use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Endpoint returned status {0}")]
    Status(u16),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_distinguished() {
        assert!(DomainError::Timeout(Duration::from_secs(30)).is_timeout());
        assert!(!DomainError::transport("connection refused").is_timeout());
        assert!(!DomainError::Status(502).is_timeout());
    }

    #[test]
    fn test_invalid_config_message() {
        let err = DomainError::invalid_config("chat timeout must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: chat timeout must be greater than zero"
        );
    }
}
