//! ==============================================================================
//! error.rs - api client errors
//! ==============================================================================

use crate::website::ApiErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("could not read response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// build from a non-2xx response, keeping the server's `message` if it sent one
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// text for a toast: the server's own words when available
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
