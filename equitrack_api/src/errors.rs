//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed before a response arrived (network error,
    /// timeout, or an unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet. The body
    /// usually carries the server's validation messages as JSON.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
