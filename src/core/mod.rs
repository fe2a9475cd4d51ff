//! Core utilities for the club roster client
//!
//! This module consolidates the plumbing shared by the directory client and
//! the command handlers:
//! - `config`: API location, credentials and timeout resolution
//! - `filters`: roster filter and its query-string form
//! - `http`: header and reqwest client construction

pub mod config;
pub mod filters;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{resolve_api_url, resolve_timeout, resolve_token, ClientConfig};
pub use filters::PlayerFilter;
pub use http::{build_client, default_headers, maybe_auth_header_map};
