//! HTTP utilities for talking to the club API

use super::ClientConfig;
use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;

const USER_AGENT: &str = concat!("club-roster/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the bearer `Authorization` header for `token`, if there is one.
///
/// Returns `Ok(None)` for a missing or blank token (read-only sessions).
pub fn maybe_auth_header_map(token: Option<&str>) -> Result<Option<HeaderMap>> {
    match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => {
            let mut h = HeaderMap::new();
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            h.insert(AUTHORIZATION, value);
            Ok(Some(h))
        }
        None => Ok(None),
    }
}

/// Build the reqwest client for `config`: default headers, user agent and
/// the optional request timeout.
pub fn build_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_headers());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_headers_accept_json() {
        let headers = default_headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_maybe_auth_header_map_with_token() {
        let headers = maybe_auth_header_map(Some("abc.def")).unwrap().unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer abc.def");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_maybe_auth_header_map_without_token() {
        assert!(maybe_auth_header_map(None).unwrap().is_none());
        assert!(maybe_auth_header_map(Some("  ")).unwrap().is_none());
    }

    #[test]
    fn test_maybe_auth_header_map_rejects_bad_token() {
        assert!(maybe_auth_header_map(Some("bad\ntoken")).is_err());
    }

    #[test]
    fn test_build_client_with_timeout() {
        let config = ClientConfig::new("http://localhost:5000/api")
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        assert!(build_client(&config).is_ok());
    }
}
