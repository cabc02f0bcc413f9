//! In-memory artifact repository.
//!
//! A small git-like store: commits hold full snapshots of the file tree,
//! branches point at commits, and writes are staged in a working tree until
//! committed. Used for the demo mount and as the client in tests.
//!
//! # Path Convention
//!
//! - Root folder: empty string `""` (`"."` is accepted as an alias)
//! - Nested file: `"folder/info.txt"`
//! - No leading or trailing slashes

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use sha2::{Digest, Sha256};

use super::client::{ArtifactClient, ClientFuture};
use super::error::ClientError;
use crate::config;
use crate::models::{CommitId, EntryKind, FileMeta, FolderEntry, RepoScope};
use crate::utils::format::normalize_folder;

type Tree = BTreeMap<String, Vec<u8>>;

/// A commit snapshot.
#[derive(Clone, Debug)]
pub struct Commit {
    pub parent: Option<CommitId>,
    pub message: String,
    tree: Tree,
}

#[derive(Debug)]
struct Store {
    commits: HashMap<CommitId, Commit>,
    branches: BTreeMap<String, CommitId>,
    current_branch: String,
    working: Tree,
}

impl Store {
    fn head_id(&self) -> Option<&CommitId> {
        self.branches.get(&self.current_branch)
    }

    fn head_tree(&self) -> Option<&Tree> {
        self.head_id()
            .and_then(|id| self.commits.get(id))
            .map(|c| &c.tree)
    }

    fn is_dirty(&self) -> bool {
        match self.head_tree() {
            Some(tree) => *tree != self.working,
            None => !self.working.is_empty(),
        }
    }

    fn is_folder(&self, path: &str) -> bool {
        if path.is_empty() {
            return true;
        }
        let prefix = format!("{}/", path);
        self.working.keys().any(|k| k.starts_with(&prefix))
    }

    fn children(&self, folder: &str) -> Option<Vec<FolderEntry>> {
        let prefix = if folder.is_empty() {
            String::new()
        } else {
            format!("{}/", folder)
        };

        let mut children: BTreeMap<&str, EntryKind> = BTreeMap::new();
        for key in self.working.keys() {
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                Some((dir, _)) => {
                    children.insert(dir, EntryKind::Folder);
                }
                None => {
                    children.entry(rest).or_insert(EntryKind::File);
                }
            }
        }

        if children.is_empty() && !folder.is_empty() {
            return None;
        }

        Some(
            children
                .into_iter()
                .map(|(name, kind)| FolderEntry {
                    path: name.to_string(),
                    kind,
                })
                .collect(),
        )
    }
}

/// Content-addressed commit id over parent, message and snapshot.
fn commit_id(parent: Option<&str>, message: &str, tree: &Tree) -> CommitId {
    let mut hasher = Sha256::new();
    hasher.update(parent.unwrap_or("").as_bytes());
    hasher.update([0]);
    hasher.update(message.as_bytes());
    for (path, bytes) in tree {
        hasher.update([0]);
        hasher.update(path.as_bytes());
        hasher.update((bytes.len() as u64).to_be_bytes());
        hasher.update(bytes);
    }
    hex::encode(hasher.finalize())
}

/// Validate a file path for writing: non-empty segments, no leading slash.
fn check_file_path(path: &str) -> Result<(), ClientError> {
    if path.is_empty() || path.split('/').any(|s| s.is_empty() || s == "." || s == "..") {
        return Err(ClientError::Sdk(format!("invalid path: {:?}", path)));
    }
    Ok(())
}

/// In-memory implementation of [`ArtifactClient`].
#[derive(Debug)]
pub struct MemoryClient {
    repo: String,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    latency_ms: u32,
    store: RefCell<Store>,
}

impl MemoryClient {
    /// Create a repository with a single branch holding `files`.
    pub fn new(repo: &str, branch: &str, files: &[(&str, &[u8])]) -> Self {
        let tree: Tree = files
            .iter()
            .map(|(path, bytes)| (path.to_string(), bytes.to_vec()))
            .collect();
        let message = "Initial commit";
        let id = commit_id(None, message, &tree);

        let mut commits = HashMap::new();
        commits.insert(
            id.clone(),
            Commit {
                parent: None,
                message: message.to_string(),
                tree: tree.clone(),
            },
        );
        let mut branches = BTreeMap::new();
        branches.insert(branch.to_string(), id);

        Self {
            repo: repo.to_string(),
            latency_ms: 0,
            store: RefCell::new(Store {
                commits,
                branches,
                current_branch: branch.to_string(),
                working: tree,
            }),
        }
    }

    /// The demo repository from [`config::demo`].
    pub fn demo() -> Self {
        let files: Vec<(&str, &[u8])> = config::demo::FILES
            .iter()
            .map(|(path, text)| (*path, text.as_bytes()))
            .collect();
        Self::new(config::demo::REPO, config::demo::BRANCH, &files)
            .with_latency(config::demo::LATENCY_MS)
    }

    /// Delay every read by `ms` milliseconds (only on wasm32).
    pub fn with_latency(mut self, ms: u32) -> Self {
        self.latency_ms = ms;
        self
    }

    /// Create `name` pointing at the current branch head.
    pub fn create_branch(&self, name: &str) -> Result<(), ClientError> {
        let mut store = self.store.borrow_mut();
        if store.branches.contains_key(name) {
            return Err(ClientError::AlreadyExists(name.to_string()));
        }
        let head = store
            .head_id()
            .cloned()
            .ok_or_else(|| ClientError::UnknownBranch(store.current_branch.clone()))?;
        store.branches.insert(name.to_string(), head);
        Ok(())
    }

    /// Head commit id of the current branch.
    pub fn head(&self) -> Option<CommitId> {
        self.store.borrow().head_id().cloned()
    }

    /// Commit messages from the current head back to the root commit.
    pub fn history(&self) -> Vec<String> {
        let store = self.store.borrow();
        let mut messages = Vec::new();
        let mut next = store.head_id().cloned();
        while let Some(id) = next {
            match store.commits.get(&id) {
                Some(commit) => {
                    messages.push(commit.message.clone());
                    next = commit.parent.clone();
                }
                None => break,
            }
        }
        messages
    }

    /// Committed content of `path` at the current head.
    pub fn committed(&self, path: &str) -> Option<Vec<u8>> {
        self.store
            .borrow()
            .head_tree()
            .and_then(|tree| tree.get(path).cloned())
    }

    async fn simulate_latency(&self) {
        #[cfg(target_arch = "wasm32")]
        if self.latency_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        }
    }

    fn stage(&self, path: &str, bytes: Vec<u8>) -> Result<(), ClientError> {
        check_file_path(path)?;
        let mut store = self.store.borrow_mut();
        if store.is_folder(path) {
            return Err(ClientError::AlreadyExists(path.to_string()));
        }
        store.working.insert(path.to_string(), bytes);
        Ok(())
    }
}

impl ArtifactClient for MemoryClient {
    fn scope(&self) -> RepoScope {
        RepoScope {
            repo: self.repo.clone(),
            branch: self.store.borrow().current_branch.clone(),
        }
    }

    fn list_folder(&self, path: &str) -> ClientFuture<'_, Vec<FolderEntry>> {
        let folder = normalize_folder(path);
        Box::pin(async move {
            self.simulate_latency().await;
            self.store
                .borrow()
                .children(&folder)
                .ok_or(ClientError::NotFound(folder))
        })
    }

    fn read_file_bytes(&self, path: &str) -> ClientFuture<'_, Option<Vec<u8>>> {
        let path = path.to_string();
        Box::pin(async move {
            self.simulate_latency().await;
            Ok(self.store.borrow().working.get(&path).cloned())
        })
    }

    fn read_file_meta(&self, path: &str) -> ClientFuture<'_, Option<FileMeta>> {
        let path = normalize_folder(path);
        Box::pin(async move {
            self.simulate_latency().await;
            let store = self.store.borrow();
            let meta = if store.working.contains_key(&path) {
                Some(FileMeta {
                    kind: EntryKind::File,
                })
            } else if store.is_folder(&path) {
                Some(FileMeta {
                    kind: EntryKind::Folder,
                })
            } else {
                None
            };
            Ok(meta)
        })
    }

    fn write_text_file(&self, path: &str, content: &str) -> Result<(), ClientError> {
        self.stage(path, content.as_bytes().to_vec())
    }

    fn write_binary_file(&self, path: &str, bytes: &[u8]) -> Result<(), ClientError> {
        self.stage(path, bytes.to_vec())
    }

    fn move_file(&self, from: &str, to: &str) -> Result<(), ClientError> {
        check_file_path(to)?;
        if from == to {
            return Ok(());
        }
        let mut store = self.store.borrow_mut();
        if store.working.contains_key(to) || store.is_folder(to) {
            return Err(ClientError::AlreadyExists(to.to_string()));
        }

        if let Some(bytes) = store.working.remove(from) {
            store.working.insert(to.to_string(), bytes);
            return Ok(());
        }

        // Moving a folder moves every file below it.
        let prefix = format!("{}/", from);
        if to.starts_with(&prefix) {
            return Err(ClientError::Sdk(format!(
                "cannot move {} into itself",
                from
            )));
        }
        let moved: Vec<String> = store
            .working
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect();
        if from.is_empty() || moved.is_empty() {
            return Err(ClientError::NotFound(from.to_string()));
        }
        for key in moved {
            if let Some(bytes) = store.working.remove(&key) {
                let target = format!("{}/{}", to, &key[prefix.len()..]);
                store.working.insert(target, bytes);
            }
        }
        Ok(())
    }

    fn has_pending_changes(&self) -> bool {
        self.store.borrow().is_dirty()
    }

    fn commit(&self, message: &str) -> ClientFuture<'_, CommitId> {
        let message = message.to_string();
        Box::pin(async move {
            let mut store = self.store.borrow_mut();
            if !store.is_dirty() {
                return Err(ClientError::NothingToCommit);
            }
            let parent = store.head_id().cloned();
            let tree = store.working.clone();
            let id = commit_id(parent.as_deref(), &message, &tree);
            store.commits.insert(
                id.clone(),
                Commit {
                    parent,
                    message,
                    tree,
                },
            );
            let branch = store.current_branch.clone();
            store.branches.insert(branch, id.clone());
            Ok(id)
        })
    }

    fn list_branches(&self) -> ClientFuture<'_, Vec<String>> {
        Box::pin(async move {
            self.simulate_latency().await;
            Ok(self.store.borrow().branches.keys().cloned().collect())
        })
    }

    fn checkout(&self, branch: &str) -> ClientFuture<'_, ()> {
        let branch = branch.to_string();
        Box::pin(async move {
            let mut store = self.store.borrow_mut();
            if store.is_dirty() {
                return Err(ClientError::Sdk(
                    "cannot switch branches with uncommitted changes".to_string(),
                ));
            }
            let tree = store
                .branches
                .get(&branch)
                .and_then(|id| store.commits.get(id))
                .map(|c| c.tree.clone())
                .ok_or_else(|| ClientError::UnknownBranch(branch.clone()))?;
            store.current_branch = branch;
            store.working = tree;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MemoryClient {
        MemoryClient::new(
            "mock",
            "main",
            &[
                ("readme.txt", b"Hello Artifact".as_slice()),
                ("folder/info.txt", b"More info".as_slice()),
                ("folder/subfolder/test.txt", b"Test file".as_slice()),
            ],
        )
    }

    #[tokio::test]
    async fn test_list_root_and_nested() {
        let client = client();
        let root = client.list_folder(".").await.unwrap();
        assert_eq!(
            root,
            vec![FolderEntry::folder("folder"), FolderEntry::file("readme.txt")]
        );
        let nested = client.list_folder("folder").await.unwrap();
        assert_eq!(
            nested,
            vec![
                FolderEntry::file("info.txt"),
                FolderEntry::folder("subfolder")
            ]
        );
    }

    #[tokio::test]
    async fn test_list_missing_folder() {
        let client = client();
        assert_eq!(
            client.list_folder("nope").await,
            Err(ClientError::NotFound("nope".into()))
        );
        // a file is not a folder
        assert!(client.list_folder("readme.txt").await.is_err());
    }

    #[tokio::test]
    async fn test_read_bytes_and_meta() {
        let client = client();
        assert_eq!(
            client.read_file_bytes("readme.txt").await.unwrap(),
            Some(b"Hello Artifact".to_vec())
        );
        assert_eq!(client.read_file_bytes("folder").await.unwrap(), None);
        assert_eq!(
            client.read_file_meta("folder").await.unwrap(),
            Some(FileMeta {
                kind: EntryKind::Folder
            })
        );
        assert_eq!(
            client.read_file_meta("readme.txt").await.unwrap(),
            Some(FileMeta {
                kind: EntryKind::File
            })
        );
        assert_eq!(client.read_file_meta("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_marks_dirty_until_commit() {
        let client = client();
        assert!(!client.has_pending_changes());
        client.write_text_file("new.txt", "").unwrap();
        assert!(client.has_pending_changes());

        let id = client.commit("Add file new.txt").await.unwrap();
        assert_eq!(id.len(), 64);
        assert!(!client.has_pending_changes());
        assert_eq!(client.head(), Some(id));
        assert_eq!(client.history(), vec!["Add file new.txt", "Initial commit"]);
        assert_eq!(client.committed("new.txt"), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_commit_without_changes() {
        let client = client();
        assert_eq!(
            client.commit("noop").await,
            Err(ClientError::NothingToCommit)
        );
    }

    #[test]
    fn test_rewrite_same_content_is_not_dirty() {
        let client = client();
        client.write_text_file("readme.txt", "Hello Artifact").unwrap();
        assert!(!client.has_pending_changes());
    }

    #[test]
    fn test_write_over_folder_rejected() {
        let client = client();
        assert_eq!(
            client.write_text_file("folder", "x"),
            Err(ClientError::AlreadyExists("folder".into()))
        );
        assert!(client.write_text_file("a//b", "x").is_err());
    }

    #[tokio::test]
    async fn test_move_file() {
        let client = client();
        client.move_file("folder/info.txt", "folder/about.txt").unwrap();
        assert!(client.has_pending_changes());
        assert_eq!(client.read_file_bytes("folder/info.txt").await.unwrap(), None);
        assert_eq!(
            client.read_file_bytes("folder/about.txt").await.unwrap(),
            Some(b"More info".to_vec())
        );
    }

    #[tokio::test]
    async fn test_move_folder() {
        let client = client();
        client.move_file("folder/subfolder", "archive").unwrap();
        assert_eq!(
            client.read_file_bytes("archive/test.txt").await.unwrap(),
            Some(b"Test file".to_vec())
        );
        assert!(client.list_folder("folder/subfolder").await.is_err());
    }

    #[test]
    fn test_move_errors() {
        let client = client();
        assert_eq!(
            client.move_file("missing.txt", "x.txt"),
            Err(ClientError::NotFound("missing.txt".into()))
        );
        assert_eq!(
            client.move_file("readme.txt", "folder/info.txt"),
            Err(ClientError::AlreadyExists("folder/info.txt".into()))
        );
        assert!(client.move_file("folder", "folder/inner").is_err());
        assert!(!client.has_pending_changes());
    }

    #[tokio::test]
    async fn test_branches_and_checkout() {
        let client = client();
        client.create_branch("dev").unwrap();
        assert_eq!(
            client.list_branches().await.unwrap(),
            vec!["dev".to_string(), "main".to_string()]
        );

        client.checkout("dev").await.unwrap();
        assert_eq!(client.scope().branch, "dev");
        client.write_text_file("dev-only.txt", "x").unwrap();
        client.commit("Add file dev-only.txt").await.unwrap();

        client.checkout("main").await.unwrap();
        assert_eq!(client.read_file_bytes("dev-only.txt").await.unwrap(), None);
        assert_eq!(
            client.checkout("nope").await,
            Err(ClientError::UnknownBranch("nope".into()))
        );
    }

    #[tokio::test]
    async fn test_checkout_refuses_dirty_tree() {
        let client = client();
        client.create_branch("dev").unwrap();
        client.write_text_file("wip.txt", "x").unwrap();
        assert!(client.checkout("dev").await.is_err());
        assert_eq!(client.scope().branch, "main");
    }

    #[test]
    fn test_commit_ids_are_content_addressed() {
        let tree: Tree = [("a".to_string(), b"1".to_vec())].into_iter().collect();
        assert_eq!(commit_id(None, "m", &tree), commit_id(None, "m", &tree));
        assert_ne!(commit_id(None, "m", &tree), commit_id(None, "n", &tree));
        assert_ne!(commit_id(None, "m", &tree), commit_id(Some("p"), "m", &tree));
    }

    #[test]
    fn test_demo_seed() {
        let client = MemoryClient::demo();
        assert_eq!(client.scope().repo, "mock");
        assert_eq!(client.scope().branch, "main");
        assert_eq!(client.committed("folder/subfolder/test2.txt"), Some(b"Test file 2".to_vec()));
    }
}
