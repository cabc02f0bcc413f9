//! Repository client capability.
//!
//! Everything durable (reads, staged writes, commits, branches) goes through
//! [`ArtifactClient`]. Components receive a client explicitly instead of
//! reaching for a global SDK handle.

use std::future::Future;
use std::pin::Pin;

use super::error::ClientError;
use crate::models::{CommitId, FileMeta, FolderEntry, RepoScope};

/// Boxed, non-`Send` future returned by client reads (wasm is single-threaded).
pub type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ClientError>> + 'a>>;

/// Operations the file browser needs from the artifact SDK.
///
/// Writes are staged synchronously; [`commit`](Self::commit) persists them.
pub trait ArtifactClient {
    /// Repository and branch the client is bound to.
    fn scope(&self) -> RepoScope;

    /// List the direct children of `path` (`""` is the root).
    fn list_folder(&self, path: &str) -> ClientFuture<'_, Vec<FolderEntry>>;

    /// Read a file's bytes. `None` when the path is not a file.
    fn read_file_bytes(&self, path: &str) -> ClientFuture<'_, Option<Vec<u8>>>;

    /// Read metadata for a path. `None` when nothing exists at the path.
    fn read_file_meta(&self, path: &str) -> ClientFuture<'_, Option<FileMeta>>;

    /// Stage a text file write.
    fn write_text_file(&self, path: &str, content: &str) -> Result<(), ClientError>;

    /// Stage a binary file write.
    fn write_binary_file(&self, path: &str, bytes: &[u8]) -> Result<(), ClientError>;

    /// Stage a move of a file from `from` to `to`.
    fn move_file(&self, from: &str, to: &str) -> Result<(), ClientError>;

    /// Whether staged writes are waiting for a commit.
    fn has_pending_changes(&self) -> bool;

    /// Commit all staged writes.
    fn commit(&self, message: &str) -> ClientFuture<'_, CommitId>;

    /// Names of all branches of the repository.
    fn list_branches(&self) -> ClientFuture<'_, Vec<String>>;

    /// Switch the client to another branch.
    fn checkout(&self, branch: &str) -> ClientFuture<'_, ()>;
}
