use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("NIM version not found: {nim}:{version}")]
    NotFound { nim: String, version: String },

    #[error("Backend returned status {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
