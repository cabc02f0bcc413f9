//! Repository scope, branches and host frame targets.

use serde::{Deserialize, Serialize};

use crate::config::SHORT_COMMIT_LEN;
use crate::utils::format::short_commit;

/// Commit identifier (hex digest).
pub type CommitId = String;

/// Repository and branch the client is currently bound to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepoScope {
    pub repo: String,
    pub branch: String,
}

/// Branch row for the branch selector.
///
/// `is_default` marks the active branch; it is not a property of the branch
/// itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchInfo {
    pub name: String,
    pub is_default: bool,
}

/// A repository location without a commit pin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeTarget {
    pub did: String,
    pub repo: String,
    pub branch: String,
}

/// Location the host frame asked this view to show.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTarget {
    pub did: String,
    pub repo: String,
    pub branch: String,
    /// Historical commit the view is pinned to (None = branch tip)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitId>,
}

impl FrameTarget {
    /// Commit id when the view is pinned to a historical snapshot.
    pub fn pinned_commit(&self) -> Option<&str> {
        self.commit.as_deref().filter(|c| !c.is_empty())
    }

    /// Abbreviated pinned commit for the banner.
    pub fn short_commit(&self) -> Option<&str> {
        self.pinned_commit().map(|c| short_commit(c, SHORT_COMMIT_LEN))
    }

    /// The same location following the branch tip.
    pub fn unpinned(&self) -> ScopeTarget {
        ScopeTarget {
            did: self.did.clone(),
            repo: self.repo.clone(),
            branch: self.branch.clone(),
        }
    }
}
