use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Notification error: {message}")]
    NotificationError { message: String },

    /// 第 `chunk` 個 (1-based) 訊息發布失敗，後續的 chunk 未送出
    #[error("Error publishing chunk {chunk} of {total}: {reason}")]
    Publish {
        chunk: usize,
        total: usize,
        reason: String,
    },
}

impl NotifyError {
    /// 1-based ordinal of the chunk that failed, if this is a publish failure.
    pub fn failed_chunk(&self) -> Option<usize> {
        match self {
            NotifyError::Publish { chunk, .. } => Some(*chunk),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
