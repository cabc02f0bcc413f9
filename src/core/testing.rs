//! Client test doubles.

use super::client::{ArtifactClient, ClientFuture};
use super::error::ClientError;
use crate::models::{CommitId, FileMeta, FolderEntry, RepoScope};

/// A client whose every call fails as if the network were down.
pub struct OfflineClient;

fn offline() -> ClientError {
    ClientError::Sdk("offline".to_string())
}

impl ArtifactClient for OfflineClient {
    fn scope(&self) -> RepoScope {
        RepoScope {
            repo: "offline".into(),
            branch: "main".into(),
        }
    }

    fn list_folder(&self, _path: &str) -> ClientFuture<'_, Vec<FolderEntry>> {
        Box::pin(async { Err(offline()) })
    }

    fn read_file_bytes(&self, _path: &str) -> ClientFuture<'_, Option<Vec<u8>>> {
        Box::pin(async { Err(offline()) })
    }

    fn read_file_meta(&self, _path: &str) -> ClientFuture<'_, Option<FileMeta>> {
        Box::pin(async { Err(offline()) })
    }

    fn write_text_file(&self, _path: &str, _content: &str) -> Result<(), ClientError> {
        Err(offline())
    }

    fn write_binary_file(&self, _path: &str, _bytes: &[u8]) -> Result<(), ClientError> {
        Err(offline())
    }

    fn move_file(&self, _from: &str, _to: &str) -> Result<(), ClientError> {
        Err(offline())
    }

    fn has_pending_changes(&self) -> bool {
        false
    }

    fn commit(&self, _message: &str) -> ClientFuture<'_, CommitId> {
        Box::pin(async { Err(offline()) })
    }

    fn list_branches(&self) -> ClientFuture<'_, Vec<String>> {
        Box::pin(async { Err(offline()) })
    }

    fn checkout(&self, _branch: &str) -> ClientFuture<'_, ()> {
        Box::pin(async { Err(offline()) })
    }
}
