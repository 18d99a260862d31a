//! Error types for eventsync.

use thiserror::Error;

/// Errors that can occur while talking to the event server or driving the UI.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Could not decode server response: {0}")]
    Decode(String),

    #[error("Not logged in (the server redirected to /login)")]
    Unauthenticated,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for eventsync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// A form submission missing one of its required fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Title and Date are required")]
pub struct ValidationError;
