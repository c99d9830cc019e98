//! Error types for inventory API calls.
//!
//! The client never interprets status codes; callers decide what a
//! rejection means for their screen.

use serde_json::Value;
use thiserror::Error;

use crate::domain::FieldErrors;

/// Errors that can occur while talking to the inventory service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL or endpoint could not be built
    #[error("Invalid API URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Server answered with a 4xx/5xx status
    #[error("Server rejected request with status {status}")]
    Rejected {
        status: u16,
        payload: Option<Value>,
    },

    /// The HTTP client itself could not be initialized
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// No response was received
    #[error("No response from server: {0}")]
    Network(#[source] reqwest::Error),

    /// A success response carried a body we could not decode
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed JSON body of a rejected request, if the server sent one.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Rejected { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// Field-keyed messages from a structured rejection payload.
    ///
    /// Only JSON objects qualify. Arrays of messages are joined with a space.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        let Value::Object(map) = self.payload()? else {
            return None;
        };
        let errors = map
            .iter()
            .map(|(field, value)| (field.clone(), message_text(value)))
            .collect();
        Some(errors)
    }

    /// Short description for transient notices.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidUrl { .. } => "Invalid server address".to_string(),
            ApiError::Rejected { status, .. } => format!("Server returned {status}"),
            ApiError::Client(_) | ApiError::Network(_) => "Server unreachable".to_string(),
            ApiError::Decode(_) => "Unexpected server response".to_string(),
        }
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(message_text)
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
