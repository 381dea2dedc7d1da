use thiserror::Error;

pub type Result<T> = std::result::Result<T, HfHubError>;

#[derive(Debug, Error)]
pub enum HfHubError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for HfHubError {
    fn from(err: reqwest::Error) -> Self {
        HfHubError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for HfHubError {
    fn from(err: serde_json::Error) -> Self {
        HfHubError::Parse(err.to_string())
    }
}
