//! Error types for the file browser.
//!
//! - [`ClientError`] - Failures reported by the repository client
//! - [`ValidationError`] - User input rejected before any client call
//! - [`ActionError`] - Either of the above, returned by write workflows

use thiserror::Error;

/// Repository client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Path does not exist on the current branch
    #[error("not found: {0}")]
    NotFound(String),
    /// Target path is already taken
    #[error("already exists: {0}")]
    AlreadyExists(String),
    /// Commit requested without staged changes
    #[error("nothing to commit")]
    NothingToCommit,
    /// Checkout of a branch the repository does not have
    #[error("unknown branch: {0}")]
    UnknownBranch(String),
    /// Error raised by the underlying SDK
    #[error("artifact client error: {0}")]
    Sdk(String),
    /// SDK returned a value of an unexpected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// User input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace
    #[error("name must not be empty")]
    EmptyName,
    /// Name contains a path separator or is a reserved name
    #[error("invalid name: {0}")]
    InvalidName(String),
    /// A rename path segment was left empty
    #[error("path segments must not be empty")]
    EmptySegment,
}

/// Error returned by write workflows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Client(#[from] ClientError),
}
