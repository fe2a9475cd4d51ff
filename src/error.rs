//! Error types for the club roster client

use crate::models::{DraftIssue, PlayerId};
use thiserror::Error;


pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    /// The request never reached the server or the response never came back.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a failure status.
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Player not found: {id}")]
    NotFound { id: PlayerId },

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API URL not provided and {env_var} environment variable not set")]
    MissingApiUrl { env_var: String },

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Invalid id: {value}")]
    InvalidId { value: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid timeout '{value}': expected a whole number of seconds")]
    InvalidTimeout { value: String },

    #[error("This action requires an API token (pass --token or set {env_var})")]
    AdminRequired { env_var: String },

    #[error("Invalid player draft: {}", format_issues(.issues))]
    InvalidDraft { issues: Vec<DraftIssue> },

    /// An action reported failure but its error was already taken from the view.
    #[error("{action} failed; the error was already reported")]
    ErrorTaken { action: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_issues(issues: &[DraftIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
