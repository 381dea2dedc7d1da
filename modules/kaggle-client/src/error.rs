use thiserror::Error;

pub type Result<T> = std::result::Result<T, KaggleError>;

#[derive(Debug, Error)]
pub enum KaggleError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed (status {status}): {message}")]
    Auth { status: u16, message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for KaggleError {
    fn from(err: reqwest::Error) -> Self {
        KaggleError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for KaggleError {
    fn from(err: serde_json::Error) -> Self {
        KaggleError::Parse(err.to_string())
    }
}
