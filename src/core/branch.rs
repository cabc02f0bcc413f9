//! Branch selector state.

use super::client::ArtifactClient;
use crate::models::BranchInfo;
use crate::utils::console;

/// Branch names, the active branch, and whether the dropdown is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchContext {
    current: String,
    names: Vec<String>,
    open: bool,
}

impl BranchContext {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            ..Self::default()
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_names(&mut self, names: Vec<String>) {
        self.names = names;
    }

    /// Branch rows; the active branch is flagged as default.
    pub fn branches(&self) -> Vec<BranchInfo> {
        self.names
            .iter()
            .map(|name| BranchInfo {
                name: name.clone(),
                is_default: *name == self.current,
            })
            .collect()
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Switch the displayed branch and close the dropdown.
    ///
    /// Returns `false` when `name` is already active; the caller issues the
    /// checkout only on `true`.
    pub fn change(&mut self, name: &str) -> bool {
        self.open = false;
        if self.current == name {
            return false;
        }
        self.current = name.to_string();
        true
    }
}

/// Fetch branch names, degrading to an empty list on failure.
pub async fn load_branch_names<C>(client: &C) -> Vec<String>
where
    C: ArtifactClient + ?Sized,
{
    match client.list_branches().await {
        Ok(names) => names,
        Err(e) => {
            console::warn(&format!("branch listing failed: {}", e));
            Vec::new()
        }
    }
}
