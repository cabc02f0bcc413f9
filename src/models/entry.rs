//! Folder entries and the display rows derived from them.

use serde::{Deserialize, Serialize};

use crate::utils::format::join_path;

// =============================================================================
// Entry Kind
// =============================================================================

/// Kind of an entry in a repository folder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Regular file (git blob)
    #[default]
    File,
    /// Folder (git tree)
    Folder,
}

impl EntryKind {
    /// Map the SDK's object type string to an entry kind.
    ///
    /// Only `"tree"` is a folder; every other type is treated as a file.
    pub fn from_sdk_type(kind: &str) -> Self {
        if kind == "tree" {
            Self::Folder
        } else {
            Self::File
        }
    }

    pub fn is_folder(self) -> bool {
        matches!(self, Self::Folder)
    }
}

// =============================================================================
// Folder Entry
// =============================================================================

/// A single child of a folder as reported by the repository client.
///
/// `path` holds the entry name only, never a `/`-separated path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    /// Entry name (no slashes)
    pub path: String,
    /// File or folder
    pub kind: EntryKind,
}

impl FolderEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            path: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            path: name.into(),
            kind: EntryKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }
}

/// Metadata returned for a single path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub kind: EntryKind,
}

// =============================================================================
// Display Item
// =============================================================================

/// A row of the file list, derived from a [`FolderEntry`] and the folder it
/// was listed in. Recomputed on every listing refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayItem {
    /// Entry name as shown in the list
    pub name: String,
    /// Path from the repository root
    pub full_path: String,
    /// Whether the row is a folder
    pub is_folder: bool,
}

impl DisplayItem {
    /// Build a display row for `entry` listed under `current_folder`.
    pub fn from_entry(entry: &FolderEntry, current_folder: &str) -> Self {
        Self {
            name: entry.path.clone(),
            full_path: join_path(current_folder, &entry.path),
            is_folder: entry.is_folder(),
        }
    }

    /// Type column label.
    pub fn type_label(&self) -> &'static str {
        if self.is_folder { "folder" } else { "file" }
    }
}
