//! Backend service access layer
//!
//! This module talks to the backend database proxy over HTTP and maps its
//! JSON responses to typed records.
//!
//! # Modules
//!
//! - [`client`]: `VersionLookup` trait and the reqwest-backed `BackendClient`
//! - [`schemas`]: Deserialized response records
//! - [`error`]: Error types for lookup operations

pub mod client;
pub mod error;
pub mod schemas;
