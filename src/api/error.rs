//! Failure taxonomy for the country-data client.
//!
//! Every failure is caught at the client boundary and surfaced as one of
//! these variants; screens only ever see a message and a retry affordance.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the connection dropped.
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout.
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// 404 from the service, or an empty name/code.
    #[error("Country not found")]
    NotFound,

    /// Any other non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Body was not JSON, or the top-level shape was wrong.
    #[error("Unexpected response: {0}")]
    Payload(String),

    /// The HTTP client itself could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Base URL could not be turned into a request URL.
    #[error("Invalid URL '{url}'")]
    InvalidUrl { url: String },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// Short text for the error panel.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport { .. } => {
                "Network error. Please check your connection.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            ApiError::NotFound
        } else {
            ApiError::Status { status }
        }
    }
}
