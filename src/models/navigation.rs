//! Navigation and selection state of the file browser.

use crate::utils::format::{join_path, normalize_folder, parent_path};

/// A breadcrumb segment of the current folder path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Segment name
    pub label: String,
    /// Folder path up to and including this segment
    pub path: String,
}

/// Current folder, selected path, and whether the details panel is open.
///
/// Every navigation clears the selection, so a selection never outlives the
/// folder it was made in. `details_visible` implies `selected_path` is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_folder: String,
    selected_path: Option<String>,
    details_visible: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in `folder` instead of the repository root.
    pub fn at(folder: &str) -> Self {
        Self {
            current_folder: normalize_folder(folder),
            ..Self::default()
        }
    }

    pub fn current_folder(&self) -> &str {
        &self.current_folder
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selected_path.as_deref()
    }

    pub fn details_visible(&self) -> bool {
        self.details_visible
    }

    pub fn is_at_root(&self) -> bool {
        self.current_folder.is_empty()
    }

    /// Enter a child folder of the current folder.
    ///
    /// Returns `false` (and changes nothing) for an empty name.
    pub fn navigate_into(&mut self, folder_name: &str) -> bool {
        if folder_name.is_empty() {
            return false;
        }
        self.current_folder = join_path(&self.current_folder, folder_name);
        self.clear_selection();
        true
    }

    /// Go to the parent folder. Returns `false` at the root.
    pub fn navigate_up(&mut self) -> bool {
        if self.is_at_root() {
            return false;
        }
        let parent = parent_path(&self.current_folder).to_string();
        self.current_folder = parent;
        self.clear_selection();
        true
    }

    /// Jump to an absolute folder path (breadcrumb click).
    pub fn navigate_to(&mut self, path: &str) {
        self.current_folder = normalize_folder(path);
        self.clear_selection();
    }

    /// Select a path and open its details.
    pub fn select(&mut self, path: impl Into<String>) {
        self.selected_path = Some(path.into());
        self.details_visible = true;
    }

    /// Select `path`, or deselect it if it is already selected.
    ///
    /// Returns `true` when the path ends up selected.
    pub fn toggle_selection(&mut self, path: &str) -> bool {
        if self.selected_path.as_deref() == Some(path) {
            self.clear_selection();
            false
        } else {
            self.select(path);
            true
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_path = None;
        self.details_visible = false;
    }

    /// Close the details panel, keeping the row highlighted.
    pub fn hide_details(&mut self) {
        self.details_visible = false;
    }

    /// Breadcrumb segments from the root to the current folder.
    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        let mut crumbs = Vec::new();
        let mut path = String::new();
        for segment in self.current_folder.split('/').filter(|s| !s.is_empty()) {
            path = join_path(&path, segment);
            crumbs.push(Crumb {
                label: segment.to_string(),
                path: path.clone(),
            });
        }
        crumbs
    }
}
