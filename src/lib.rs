//! Client library for the Dynamo api-server backend database proxy.
//!
//! The backend exposes NIM version records over a versioned REST API; this
//! crate fetches a single record per call and decodes it into
//! [`backend::schemas::DynamoNimVersion`]. There is no caching and no retry
//! logic, every lookup is one outbound GET.

pub mod backend;
pub mod config;
