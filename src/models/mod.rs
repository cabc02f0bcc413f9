//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FolderEntry`], [`DisplayItem`], [`FileMeta`] - Repository folder contents
//! - [`NavigationState`], [`Crumb`] - Current folder and selection
//! - [`Gesture`], [`Loadable`], [`EmptyState`] - Explorer view state
//! - [`RepoScope`], [`BranchInfo`], [`FrameTarget`] - Repository and host context

mod entry;
mod explorer;
mod navigation;
mod repo;

pub use entry::{DisplayItem, EntryKind, FileMeta, FolderEntry};
pub use explorer::{EmptyState, Gesture, Loadable};
pub use navigation::{Crumb, NavigationState};
pub use repo::{BranchInfo, CommitId, FrameTarget, RepoScope, ScopeTarget};
