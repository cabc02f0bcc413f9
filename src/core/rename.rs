//! In-place rename of the selected path.
//!
//! The path is edited as a list of `/`-separated segments so any folder on
//! the way can be changed, which moves the file.
//!
//! ```text
//! Idle --start--> Editing --submit--> Committing --finish(ok)--> Idle
//!                   ^  |                   |
//!                   |  +--cancel--> Idle   |
//!                   +----finish(err)-------+
//! ```

use super::actions::validate_name;
use super::error::ValidationError;

/// Segments being edited for one path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameState {
    pub original_path: String,
    pub segments: Vec<String>,
    /// Error of the last failed submit, kept for display
    pub error: Option<String>,
}

impl RenameState {
    fn new(original_path: &str) -> Self {
        Self {
            original_path: original_path.to_string(),
            segments: original_path.split('/').map(String::from).collect(),
            error: None,
        }
    }

    /// The path in progress.
    pub fn joined(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.trim())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// A rename ready to be sent to the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameRequest {
    pub from: String,
    pub to: String,
}

impl RenameRequest {
    pub fn commit_message(&self) -> String {
        format!("Rename {} to {}", self.from, self.to)
    }
}

/// Result of [`RenameFlow::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to do; the flow is back to idle
    Unchanged,
    /// Send this request, then call [`RenameFlow::finish`]
    Request(RenameRequest),
}

/// Rename state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RenameFlow {
    #[default]
    Idle,
    Editing(RenameState),
    Committing(RenameState),
}

impl RenameFlow {
    /// Begin editing `selected_path`.
    pub fn start(&mut self, selected_path: &str) {
        *self = Self::Editing(RenameState::new(selected_path));
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_committing(&self) -> bool {
        matches!(self, Self::Committing(_))
    }

    /// Segments being edited, if editing or committing.
    pub fn state(&self) -> Option<&RenameState> {
        match self {
            Self::Idle => None,
            Self::Editing(state) | Self::Committing(state) => Some(state),
        }
    }

    /// Replace one segment. Ignored unless editing or out of range.
    pub fn edit_segment(&mut self, index: usize, value: &str) {
        if let Self::Editing(state) = self
            && let Some(segment) = state.segments.get_mut(index)
        {
            *segment = value.to_string();
        }
    }

    /// Discard the edit.
    pub fn cancel(&mut self) {
        if !self.is_committing() {
            *self = Self::Idle;
        }
    }

    /// Validate the edited path and move to `Committing` if it changed.
    ///
    /// An unchanged path, or one with every segment cleared, cancels the edit
    /// without a request.
    /// Validation errors leave the flow in `Editing`.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        let Self::Editing(state) = self else {
            return Ok(SubmitOutcome::Unchanged);
        };

        let target = state.joined();
        let cleared = state.segments.iter().all(|s| s.trim().is_empty());
        if cleared || target == state.original_path {
            *self = Self::Idle;
            return Ok(SubmitOutcome::Unchanged);
        }

        for segment in &state.segments {
            let checked = match validate_name(segment) {
                Err(ValidationError::EmptyName) => Err(ValidationError::EmptySegment),
                other => other.map(|_| ()),
            };
            if let Err(err) = checked {
                state.error = Some(err.to_string());
                return Err(err);
            }
        }

        let request = RenameRequest {
            from: state.original_path.clone(),
            to: target,
        };
        let mut committing = state.clone();
        committing.error = None;
        *self = Self::Committing(committing);
        Ok(SubmitOutcome::Request(request))
    }

    /// Settle a submitted request.
    ///
    /// Returns the new path on success (the caller selects it). On failure the
    /// edit reopens with the error so the user can retry or cancel.
    pub fn finish<E: std::fmt::Display>(&mut self, result: Result<String, E>) -> Option<String> {
        let Self::Committing(state) = self else {
            return None;
        };
        match result {
            Ok(new_path) => {
                *self = Self::Idle;
                Some(new_path)
            }
            Err(e) => {
                let mut editing = state.clone();
                editing.error = Some(e.to_string());
                *self = Self::Editing(editing);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_seeds_segments() {
        let mut flow = RenameFlow::default();
        flow.start("a/b/c.txt");
        let state = flow.state().unwrap();
        assert_eq!(state.segments, vec!["a", "b", "c.txt"]);
        assert_eq!(state.joined(), "a/b/c.txt");
    }

    #[test]
    fn test_unchanged_submit_is_cancel() {
        let mut flow = RenameFlow::default();
        flow.start("a/old");
        assert_eq!(flow.submit(), Ok(SubmitOutcome::Unchanged));
        assert!(flow.is_idle());
    }

    #[test]
    fn test_empty_submit_is_cancel() {
        let mut flow = RenameFlow::default();
        flow.start("old");
        flow.edit_segment(0, "   ");
        assert_eq!(flow.submit(), Ok(SubmitOutcome::Unchanged));
        assert!(flow.is_idle());
    }

    #[test]
    fn test_changed_submit_requests_rename() {
        let mut flow = RenameFlow::default();
        flow.start("a/old");
        flow.edit_segment(1, "b");
        let outcome = flow.submit().unwrap();
        let SubmitOutcome::Request(request) = outcome else {
            panic!("expected a request");
        };
        assert_eq!(request.from, "a/old");
        assert_eq!(request.to, "a/b");
        assert_eq!(request.commit_message(), "Rename a/old to a/b");
        assert!(flow.is_committing());

        assert_eq!(flow.finish::<String>(Ok("a/b".into())), Some("a/b".into()));
        assert!(flow.is_idle());
    }

    #[test]
    fn test_segments_are_trimmed() {
        let mut flow = RenameFlow::default();
        flow.start("docs/a.md");
        flow.edit_segment(1, " b.md ");
        assert_eq!(
            flow.submit(),
            Ok(SubmitOutcome::Request(RenameRequest {
                from: "docs/a.md".into(),
                to: "docs/b.md".into(),
            }))
        );
    }

    #[test]
    fn test_empty_middle_segment_rejected() {
        let mut flow = RenameFlow::default();
        flow.start("a/b/c");
        flow.edit_segment(1, "");
        assert_eq!(flow.submit(), Err(ValidationError::EmptySegment));
        let state = flow.state().unwrap();
        assert!(matches!(flow, RenameFlow::Editing(_)));
        assert!(state.error.is_some());
    }

    #[test]
    fn test_slash_in_segment_rejected() {
        let mut flow = RenameFlow::default();
        flow.start("a/b");
        flow.edit_segment(1, "x/y");
        assert_eq!(
            flow.submit(),
            Err(ValidationError::InvalidName("x/y".into()))
        );
    }

    #[test]
    fn test_placeholder_name_rejected() {
        let mut flow = RenameFlow::default();
        flow.start("readme.txt");
        flow.edit_segment(0, ".gitkeep");
        assert_eq!(
            flow.submit(),
            Err(ValidationError::InvalidName(".gitkeep".into()))
        );
        assert!(matches!(flow, RenameFlow::Editing(_)));
    }

    #[test]
    fn test_clearing_every_segment_is_cancel() {
        let mut flow = RenameFlow::default();
        flow.start("docs/a.md");
        flow.edit_segment(0, "");
        flow.edit_segment(1, "  ");
        assert_eq!(flow.submit(), Ok(SubmitOutcome::Unchanged));
        assert!(flow.is_idle());
    }

    #[test]
    fn test_failed_finish_reopens_editing() {
        let mut flow = RenameFlow::default();
        flow.start("old.txt");
        flow.edit_segment(0, "new.txt");
        flow.submit().unwrap();
        assert_eq!(flow.finish::<&str>(Err("offline")), None);
        let RenameFlow::Editing(state) = &flow else {
            panic!("expected editing");
        };
        assert_eq!(state.error.as_deref(), Some("offline"));
        assert_eq!(state.segments, vec!["new.txt"]);

        // retry
        assert!(matches!(flow.submit(), Ok(SubmitOutcome::Request(_))));
    }

    #[test]
    fn test_cancel_and_out_of_range_edit() {
        let mut flow = RenameFlow::default();
        flow.start("a");
        flow.edit_segment(5, "ignored");
        assert_eq!(flow.state().unwrap().segments, vec!["a"]);
        flow.cancel();
        assert!(flow.is_idle());
        flow.edit_segment(0, "x");
        assert!(flow.is_idle());
    }
}
