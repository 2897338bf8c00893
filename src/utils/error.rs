use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("fetch failed with status {status}: {url}")]
    FetchError {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("post not found: {slug}")]
    NotFoundError { slug: String },

    #[error("no further pages to load")]
    PageExhaustedError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BlogError>;
