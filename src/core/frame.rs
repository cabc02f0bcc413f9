//! Host frame integration: the pinned target and the "switch to latest" hook.

use std::cell::RefCell;

use serde::Serialize;

use crate::config::{SELECTION_MESSAGE_TYPE, demo};
use crate::models::{FrameTarget, ScopeTarget};
use crate::utils::console;

/// The page embedding the file browser.
pub trait HostFrame {
    /// Target the browser was opened on.
    fn target(&self) -> FrameTarget;

    /// Ask the host to switch to `target` (unpinned).
    fn on_selection(&self, target: ScopeTarget);
}

/// Message posted to the parent window on selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub target: ScopeTarget,
}

impl SelectionMessage {
    pub fn new(target: ScopeTarget) -> Self {
        Self {
            kind: SELECTION_MESSAGE_TYPE,
            target,
        }
    }
}

/// Build a target from query parameters, falling back to the demo scope.
pub fn target_from_params(get: impl Fn(&str) -> Option<String>) -> FrameTarget {
    let non_empty = |key: &str| get(key).filter(|v| !v.is_empty());
    FrameTarget {
        did: non_empty("did").unwrap_or_else(|| demo::DID.to_string()),
        repo: non_empty("repo").unwrap_or_else(|| demo::REPO.to_string()),
        branch: non_empty("branch").unwrap_or_else(|| demo::BRANCH.to_string()),
        commit: non_empty("commit"),
    }
}

// =============================================================================
// Browser Frame
// =============================================================================

/// Frame backed by the real page: reads `?did=&repo=&branch=&commit=` and
/// posts selections to `window.parent`.
#[derive(Clone, Debug)]
pub struct BrowserFrame {
    target: FrameTarget,
}

impl BrowserFrame {
    /// Read the target from the current page URL.
    pub fn from_location() -> Self {
        let params = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok());
        let target = target_from_params(|key| params.as_ref().and_then(|p| p.get(key)));
        Self { target }
    }
}

impl HostFrame for BrowserFrame {
    fn target(&self) -> FrameTarget {
        self.target.clone()
    }

    fn on_selection(&self, target: ScopeTarget) {
        let message = SelectionMessage::new(target);
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value = match message.serialize(&serializer) {
            Ok(value) => value,
            Err(e) => {
                console::error(&format!("Failed to encode selection message: {}", e));
                return;
            }
        };
        match web_sys::window().and_then(|w| w.parent().ok().flatten()) {
            Some(parent) => {
                if parent.post_message(&value, "*").is_err() {
                    console::error("Failed to post selection to host frame");
                }
            }
            None => console::warn("No parent window to receive selection"),
        }
    }
}

// =============================================================================
// Static Frame
// =============================================================================

/// Frame with a fixed target that records selections.
///
/// Used for the demo mount and in tests. A selection unpins the target.
#[derive(Debug, Default)]
pub struct StaticFrame {
    target: RefCell<FrameTarget>,
    selections: RefCell<Vec<ScopeTarget>>,
}

impl StaticFrame {
    pub fn new(target: FrameTarget) -> Self {
        Self {
            target: RefCell::new(target),
            selections: RefCell::default(),
        }
    }

    pub fn selections(&self) -> Vec<ScopeTarget> {
        self.selections.borrow().clone()
    }
}

impl HostFrame for StaticFrame {
    fn target(&self) -> FrameTarget {
        self.target.borrow().clone()
    }

    fn on_selection(&self, target: ScopeTarget) {
        console::log(&format!(
            "Selection: {}/{} on {}",
            target.did, target.repo, target.branch
        ));
        *self.target.borrow_mut() = FrameTarget {
            did: target.did.clone(),
            repo: target.repo.clone(),
            branch: target.branch.clone(),
            commit: None,
        };
        self.selections.borrow_mut().push(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_target_from_params() {
        let params: HashMap<&str, &str> = [
            ("did", "did:key:z6Mk"),
            ("repo", "docs"),
            ("branch", "dev"),
            ("commit", "0123456789abcdef"),
        ]
        .into();
        let target = target_from_params(|k| params.get(k).map(|v| v.to_string()));
        assert_eq!(target.repo, "docs");
        assert_eq!(target.short_commit(), Some("0123456"));
    }

    #[test]
    fn test_target_from_params_defaults() {
        let target = target_from_params(|k| (k == "commit").then(String::new));
        assert_eq!(target.did, demo::DID);
        assert_eq!(target.repo, demo::REPO);
        assert_eq!(target.branch, demo::BRANCH);
        assert_eq!(target.commit, None);
    }

    #[test]
    fn test_selection_message_json() {
        let message = SelectionMessage::new(ScopeTarget {
            did: "d".into(),
            repo: "r".into(),
            branch: "b".into(),
        });
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r#"{"type":"selection","target":{"did":"d","repo":"r","branch":"b"}}"#
        );
    }

    #[test]
    fn test_static_frame_records_and_unpins() {
        let frame = StaticFrame::new(FrameTarget {
            did: "d".into(),
            repo: "r".into(),
            branch: "b".into(),
            commit: Some("abcdef0123".into()),
        });
        assert!(frame.target().pinned_commit().is_some());
        frame.on_selection(frame.target().unpinned());
        assert_eq!(frame.target().pinned_commit(), None);
        assert_eq!(frame.selections().len(), 1);
        assert_eq!(frame.selections()[0].branch, "b");
    }
}
