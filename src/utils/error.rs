use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. Display keeps the old coarse "<operation> failed"
    /// wording; status and backend body are available to callers that want
    /// more than the message.
    #[error("{operation} failed: server returned status {status}")]
    Api {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;
