//! Error types for the library layer.

use std::fmt;

use serde_json::Value;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding input validation failures.
#[derive(Debug)]
pub enum EquitrackError {
    /// An error from the underlying API client.
    Api(equitrack_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for EquitrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for EquitrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<equitrack_api::Error> for EquitrackError {
    fn from(e: equitrack_api::Error) -> Self {
        Self::Api(e)
    }
}

/// Extracts the most specific human-readable message from an API failure.
///
/// Resolution order: a dedicated `error` string in the response body, else
/// every field-error message in the body joined with `", "`, else the
/// caller-supplied fallback. Transport failures always yield the fallback.
pub fn server_message(err: &equitrack_api::Error, fallback: &str) -> String {
    let body = match err {
        equitrack_api::Error::HttpStatus { body, .. } => body,
        equitrack_api::Error::RequestFailed => return fallback.to_string(),
    };

    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
        return fallback.to_string();
    };

    if let Some(Value::String(message)) = fields.get("error") {
        return message.clone();
    }

    let mut messages = Vec::new();
    for value in fields.values() {
        match value {
            Value::String(s) => messages.push(s.clone()),
            Value::Array(items) => {
                messages.extend(items.iter().filter_map(|v| v.as_str().map(str::to_string)));
            }
            _ => {}
        }
    }

    if messages.is_empty() {
        fallback.to_string()
    } else {
        messages.join(", ")
    }
}
