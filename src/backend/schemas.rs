//! Response records returned by the backend database proxy

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single NIM version record as stored by the backend.
///
/// Only `name` and `version` are interpreted by this crate. The backend is
/// free to grow the schema; fields it adds land in [`extra`](Self::extra)
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamoNimVersion {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub upload_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Service-defined metadata this client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
