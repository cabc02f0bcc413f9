//! Explorer-related data types for the file browser UI.

/// Classified pointer/keyboard gesture on a file list row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Single click: toggle selection
    Select,
    /// Double click or Enter: open the row
    Activate,
}

impl Gesture {
    /// Classify a DOM `click` event by its `detail` (click count).
    ///
    /// Keyboard-synthesized clicks report a count of zero and are treated as
    /// activation.
    pub fn from_click_count(count: i32) -> Self {
        if count == 1 {
            Self::Select
        } else {
            Self::Activate
        }
    }
}

/// State of an asynchronous fetch as seen by the UI.
///
/// `Pending` is a state, not an error: it renders as a loading indicator,
/// never as stale or empty data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Request issued, no response applied yet
    #[default]
    Pending,
    /// Response applied
    Ready(T),
    /// Request failed with a displayable message
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Pending => Loadable::Pending,
            Self::Ready(value) => Loadable::Ready(f(value)),
            Self::Failed(message) => Loadable::Failed(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Loadable<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Message shown when a listing has no visible rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// A non-root folder with no entries
    EmptyFolder,
    /// The repository root has no entries
    NoFiles,
}

impl EmptyState {
    pub fn for_folder(current_folder: &str) -> Self {
        if current_folder.is_empty() {
            Self::NoFiles
        } else {
            Self::EmptyFolder
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::EmptyFolder => "Empty Folder",
            Self::NoFiles => "No Files Found",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyFolder => "This folder is empty",
            Self::NoFiles => "No files available",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_from_click_count() {
        assert_eq!(Gesture::from_click_count(1), Gesture::Select);
        assert_eq!(Gesture::from_click_count(2), Gesture::Activate);
        assert_eq!(Gesture::from_click_count(3), Gesture::Activate);
        assert_eq!(Gesture::from_click_count(0), Gesture::Activate);
    }

    #[test]
    fn test_loadable_from_result() {
        let ok: Loadable<u8> = Ok::<_, String>(3).into();
        assert_eq!(ok.ready(), Some(&3));
        let err: Loadable<u8> = Err::<u8, _>("boom".to_string()).into();
        assert_eq!(err.error(), Some("boom"));
        assert!(Loadable::<u8>::default().is_pending());
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(EmptyState::for_folder(""), EmptyState::NoFiles);
        assert_eq!(EmptyState::for_folder("docs"), EmptyState::EmptyFolder);
        assert_eq!(EmptyState::NoFiles.title(), "No Files Found");
        assert_eq!(EmptyState::EmptyFolder.message(), "This folder is empty");
    }
}
