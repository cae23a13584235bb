//! Error types for the collaborator clients.

/// Errors that can occur when talking to the Catalog or Auth service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request never produced a usable response (bad URL, network
    /// error, timeout, or an unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The service answered with a non-success status; the body snippet is
    /// kept for logs.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
