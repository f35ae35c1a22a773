use thiserror::Error;

/// Message shown when the profile lookup comes back unsuccessful. The API
/// answers a missing user and an exhausted quota the same way here, so the
/// text names both.
pub const NOT_FOUND_OR_RATE_LIMITED: &str = "User not found or API limit reached";

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Username is empty")]
    EmptyInput,

    #[error("User not found or API limit reached")]
    NotFoundOrRateLimited,

    #[error("Repositories could not be loaded: {0}")]
    RepositoriesUnavailable(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ViewerError {
    /// Failures raised by the transport or by decoding a response, as opposed
    /// to an answer the API gave us.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Json(_) | Self::InvalidUrl(_))
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
