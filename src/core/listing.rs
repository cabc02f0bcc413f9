//! Directory listing derivation.
//!
//! Turns the raw entries of a folder into the ordered rows of the file list:
//! the placeholder file is hidden, folders come first, and names within a
//! kind follow locale-aware order.

use std::cmp::Ordering;

use crate::config::PLACEHOLDER_FILE;
use crate::models::{DisplayItem, EmptyState, FolderEntry, Loadable};
use crate::utils::collate::locale_compare;

/// Ordering of folder entries: folders before files, then by name.
pub fn compare_entries(a: &FolderEntry, b: &FolderEntry) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => locale_compare(&a.path, &b.path),
    }
}

/// Build the display rows for `entries` listed under `current_folder`.
pub fn build_listing(entries: &[FolderEntry], current_folder: &str) -> Vec<DisplayItem> {
    let mut visible: Vec<&FolderEntry> = entries
        .iter()
        .filter(|entry| entry.path != PLACEHOLDER_FILE)
        .collect();
    visible.sort_by(|a, b| compare_entries(a, b));
    visible
        .into_iter()
        .map(|entry| DisplayItem::from_entry(entry, current_folder))
        .collect()
}

/// What the file list pane shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingView {
    /// Listing request still in flight
    Loading,
    /// Listing failed
    Error(String),
    /// Listing arrived with no visible rows
    Empty(EmptyState),
    /// Rows to render
    Items(Vec<DisplayItem>),
}

impl ListingView {
    /// Derive the pane state from a listing fetch and its folder.
    pub fn derive(listing: &Loadable<Vec<FolderEntry>>, current_folder: &str) -> Self {
        match listing {
            Loadable::Pending => Self::Loading,
            Loadable::Failed(message) => Self::Error(message.clone()),
            Loadable::Ready(entries) => {
                let items = build_listing(entries, current_folder);
                if items.is_empty() {
                    Self::Empty(EmptyState::for_folder(current_folder))
                } else {
                    Self::Items(items)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[DisplayItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_folders_before_files() {
        let entries = vec![
            FolderEntry::file("a.txt"),
            FolderEntry::folder("zeta"),
            FolderEntry::file("B.txt"),
            FolderEntry::folder("alpha"),
        ];
        let items = build_listing(&entries, "");
        assert_eq!(names(&items), vec!["alpha", "zeta", "a.txt", "B.txt"]);
        assert!(items[0].is_folder && items[1].is_folder);
        assert!(!items[2].is_folder && !items[3].is_folder);
    }

    #[test]
    fn test_placeholder_hidden() {
        let entries = vec![
            FolderEntry::file(".gitkeep"),
            FolderEntry::file("notes.md"),
        ];
        let items = build_listing(&entries, "docs");
        assert_eq!(names(&items), vec!["notes.md"]);
        assert_eq!(items[0].full_path, "docs/notes.md");
    }

    #[test]
    fn test_full_paths() {
        let entries = vec![FolderEntry::folder("sub"), FolderEntry::file("x")];
        for folder in ["", "a", "a/b"] {
            for item in build_listing(&entries, folder) {
                let expected = if folder.is_empty() {
                    item.name.clone()
                } else {
                    format!("{}/{}", folder, item.name)
                };
                assert_eq!(item.full_path, expected);
            }
        }
    }

    #[test]
    fn test_sort_is_idempotent() {
        let entries = vec![
            FolderEntry::file("éa"),
            FolderEntry::file("Ea"),
            FolderEntry::file("ea"),
            FolderEntry::folder("dir"),
            FolderEntry::file("eb"),
        ];
        let once = build_listing(&entries, "");
        let reordered: Vec<FolderEntry> = once
            .iter()
            .rev()
            .map(|i| FolderEntry {
                path: i.name.clone(),
                kind: if i.is_folder {
                    crate::models::EntryKind::Folder
                } else {
                    crate::models::EntryKind::File
                },
            })
            .collect();
        let twice = build_listing(&reordered, "");
        assert_eq!(once, twice);
        assert_eq!(names(&once), vec!["dir", "ea", "Ea", "éa", "eb"]);
    }

    #[test]
    fn test_listing_view_states() {
        assert_eq!(ListingView::derive(&Loadable::Pending, ""), ListingView::Loading);
        assert_eq!(
            ListingView::derive(&Loadable::Ready(vec![]), ""),
            ListingView::Empty(EmptyState::NoFiles)
        );
        assert_eq!(
            ListingView::derive(&Loadable::Ready(vec![FolderEntry::file(".gitkeep")]), "new"),
            ListingView::Empty(EmptyState::EmptyFolder)
        );
        assert_eq!(
            ListingView::derive(&Loadable::Failed("offline".into()), "x"),
            ListingView::Error("offline".into())
        );
    }
}
