//! Version lookup against the backend database proxy

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::backend::error::BackendError;
use crate::backend::schemas::DynamoNimVersion;
use crate::config::{self, REQUEST_TIMEOUT_MS};
use tracing::{error, warn};

/// Maximum number of response-body bytes carried in a `Remote` error
const ERROR_BODY_LIMIT: usize = 256;

/// Trait for resolving NIM version records from a remote service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionLookup: Send + Sync {
    /// Fetches one version record from the backend
    ///
    /// # Arguments
    /// * `nim` - The NIM identifier (e.g., "llama3")
    /// * `version` - The version label (e.g., "v1")
    ///
    /// # Returns
    /// * `Ok(DynamoNimVersion)` - The decoded record
    /// * `Err(BackendError)` - If the lookup fails, carrying which phase failed
    async fn lookup_version(
        &self,
        nim: &str,
        version: &str,
    ) -> Result<DynamoNimVersion, BackendError>;
}

/// Reqwest-backed client for the backend database proxy
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a new BackendClient with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_millis(REQUEST_TIMEOUT_MS))
    }

    /// Creates a new BackendClient with the base URL taken from the environment
    pub fn from_env() -> Result<Self, BackendError> {
        Ok(Self::new(&config::backend_url()?))
    }

    fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("dynamo-backend-client")
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn version_url(&self, nim: &str, version: &str) -> String {
        format!(
            "{}/api/v1/dynamo_nims/{}/versions/{}",
            self.base_url, nim, version
        )
    }
}

/// Truncates `s` to at most `limit` bytes, backing up to the nearest char
/// boundary so multibyte text never splits mid-character.
fn truncate_on_char_boundary(s: &mut String, limit: usize) {
    if s.len() <= limit {
        return;
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

#[async_trait::async_trait]
impl VersionLookup for BackendClient {
    async fn lookup_version(
        &self,
        nim: &str,
        version: &str,
    ) -> Result<DynamoNimVersion, BackendError> {
        let url = self.version_url(nim, version);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(
                "Failed to get Dynamo NIM version {}:{} from backend: {}",
                nim, version, e
            );
            BackendError::Transport(e)
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            warn!("Dynamo NIM version {}:{} not found in backend", nim, version);
            return Err(BackendError::NotFound {
                nim: nim.to_string(),
                version: version.to_string(),
            });
        }

        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            truncate_on_char_boundary(&mut body, ERROR_BODY_LIMIT);
            warn!("Backend returned status {}: {}", status, url);
            return Err(BackendError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let record: DynamoNimVersion = response.json().await.map_err(|e| {
            warn!(
                "Failed to unmarshal Dynamo NIM version {}:{}: {}",
                nim, version, e
            );
            BackendError::Decode(e.to_string())
        })?;

        Ok(record)
    }
}
