//! Row gesture handling for the file list.
//!
//! Folders are entered with [`Gesture::Activate`] (double click or Enter);
//! a single click only selects. Files toggle selection on a single click and
//! open their details on activation.

use crate::models::{DisplayItem, Gesture, NavigationState};

/// What a gesture on a row did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Navigated into the folder
    Entered(String),
    /// Row became selected with details shown
    Selected(String),
    /// Previously selected row was deselected
    Deselected,
}

/// Apply a gesture on `item` to the navigation state.
pub fn handle_gesture(
    nav: &mut NavigationState,
    item: &DisplayItem,
    gesture: Gesture,
) -> SelectionOutcome {
    match (item.is_folder, gesture) {
        (true, Gesture::Activate) => {
            nav.navigate_into(&item.name);
            SelectionOutcome::Entered(nav.current_folder().to_string())
        }
        (false, Gesture::Activate) => {
            nav.select(item.full_path.clone());
            SelectionOutcome::Selected(item.full_path.clone())
        }
        (_, Gesture::Select) => {
            if nav.toggle_selection(&item.full_path) {
                SelectionOutcome::Selected(item.full_path.clone())
            } else {
                SelectionOutcome::Deselected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FolderEntry;

    fn item(entry: FolderEntry, folder: &str) -> DisplayItem {
        DisplayItem::from_entry(&entry, folder)
    }

    #[test]
    fn test_select_toggles_file() {
        let mut nav = NavigationState::at("folder");
        let info = item(FolderEntry::file("info.txt"), "folder");

        assert_eq!(
            handle_gesture(&mut nav, &info, Gesture::Select),
            SelectionOutcome::Selected("folder/info.txt".into())
        );
        assert!(nav.details_visible());
        assert_eq!(
            handle_gesture(&mut nav, &info, Gesture::Select),
            SelectionOutcome::Deselected
        );
        assert_eq!(nav.selected_path(), None);
        assert!(!nav.details_visible());
    }

    #[test]
    fn test_select_other_file_switches() {
        let mut nav = NavigationState::new();
        let a = item(FolderEntry::file("a.txt"), "");
        let b = item(FolderEntry::file("b.txt"), "");
        handle_gesture(&mut nav, &a, Gesture::Select);
        handle_gesture(&mut nav, &b, Gesture::Select);
        assert_eq!(nav.selected_path(), Some("b.txt"));
        assert!(nav.details_visible());
    }

    #[test]
    fn test_single_click_on_folder_selects() {
        let mut nav = NavigationState::new();
        let folder = item(FolderEntry::folder("folder"), "");
        assert_eq!(
            handle_gesture(&mut nav, &folder, Gesture::Select),
            SelectionOutcome::Selected("folder".into())
        );
        assert_eq!(nav.current_folder(), "");
    }

    #[test]
    fn test_activate_folder_enters() {
        let mut nav = NavigationState::at("folder");
        nav.select("folder/info.txt");
        let sub = item(FolderEntry::folder("subfolder"), "folder");
        assert_eq!(
            handle_gesture(&mut nav, &sub, Gesture::Activate),
            SelectionOutcome::Entered("folder/subfolder".into())
        );
        assert_eq!(nav.selected_path(), None);
        assert!(!nav.details_visible());
    }

    #[test]
    fn test_activate_file_does_not_toggle() {
        let mut nav = NavigationState::new();
        let readme = item(FolderEntry::file("readme.txt"), "");
        handle_gesture(&mut nav, &readme, Gesture::Select);
        handle_gesture(&mut nav, &readme, Gesture::Activate);
        assert_eq!(nav.selected_path(), Some("readme.txt"));
        assert!(nav.details_visible());
    }
}
