use crate::backend::error::BackendError;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for lookup requests in milliseconds (30 seconds)
pub const REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "DYNAMO_BACKEND_URL";

/// Resolves the backend base URL from the environment.
pub fn backend_url() -> Result<String, BackendError> {
    backend_url_with_env(std::env::var(BACKEND_URL_ENV).ok())
}

fn backend_url_with_env(value: Option<String>) -> Result<String, BackendError> {
    let url = value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BackendError::Config(format!("{} is not set", BACKEND_URL_ENV)))?;

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(BackendError::Config(format!(
            "{} must be an http(s) URL, got: {}",
            BACKEND_URL_ENV, url
        )));
    }

    Ok(url)
}
