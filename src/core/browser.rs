//! File browser state: navigation plus the fetched data it depends on.
//!
//! Every listing or content fetch is issued with a [`Ticket`]. A response is
//! applied only while its ticket is still the latest one for the same folder
//! or path; anything older is dropped. This is what keeps a slow listing for
//! a folder the user already left from replacing the new folder's view.

use super::client::ArtifactClient;
use super::details::{FileDetails, Preview};
use super::error::ClientError;
use super::listing::ListingView;
use super::rename::{RenameFlow, RenameRequest, SubmitOutcome};
use super::selection::{SelectionOutcome, handle_gesture};
use super::error::ValidationError;
use crate::models::{
    DisplayItem, FileMeta, FolderEntry, Gesture, Loadable, NavigationState, RepoScope,
};

/// Identifies one issued request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    key: String,
}

impl Ticket {
    /// Folder or path the request was issued for.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Bytes and metadata of the selected path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileContent {
    pub bytes: Option<Vec<u8>>,
    pub meta: Option<FileMeta>,
}

/// Selected path and bytes, compared before a preview is rebuilt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewSource {
    pub path: String,
    pub bytes: Option<Vec<u8>>,
}

impl PreviewSource {
    pub fn build(&self) -> Preview {
        Preview::build(&self.path, self.bytes.as_deref())
    }
}

/// Browser state shared by the file list and details panel.
#[derive(Clone, Debug, Default)]
pub struct FileBrowser {
    nav: NavigationState,
    listing: Loadable<Vec<FolderEntry>>,
    listing_ticket: Option<Ticket>,
    content: Option<Loadable<FileContent>>,
    content_ticket: Option<Ticket>,
    rename: RenameFlow,
    generation: u64,
}

impl FileBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn listing(&self) -> &Loadable<Vec<FolderEntry>> {
        &self.listing
    }

    /// Content of the selected path; `None` when nothing is selected.
    pub fn content(&self) -> Option<&Loadable<FileContent>> {
        self.content.as_ref()
    }

    pub fn rename(&self) -> &RenameFlow {
        &self.rename
    }

    pub fn listing_view(&self) -> ListingView {
        ListingView::derive(&self.listing, self.nav.current_folder())
    }

    /// Details fields of the selected path, once its content is known.
    pub fn details(&self, scope: &RepoScope) -> Option<FileDetails> {
        let path = self.nav.selected_path()?;
        let content = self.content.as_ref().and_then(|c| c.ready());
        Some(FileDetails::derive(
            path,
            content.and_then(|c| c.bytes.as_deref()),
            content.and_then(|c| c.meta.as_ref()),
            scope,
        ))
    }

    /// Inputs the preview is built from: the selected path and its bytes.
    pub fn preview_source(&self) -> Option<PreviewSource> {
        let path = self.nav.selected_path()?;
        let bytes = self
            .content
            .as_ref()
            .and_then(|c| c.ready())
            .and_then(|c| c.bytes.clone());
        Some(PreviewSource {
            path: path.to_string(),
            bytes,
        })
    }

    /// Preview of the selected path. Unavailable until bytes arrive.
    pub fn preview(&self) -> Option<Preview> {
        self.preview_source().map(|source| source.build())
    }

    fn next_ticket(&mut self, key: &str) -> Ticket {
        self.generation += 1;
        Ticket {
            generation: self.generation,
            key: key.to_string(),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Run a navigation change and invalidate whatever it made stale.
    fn navigate(&mut self, change: impl FnOnce(&mut NavigationState)) {
        let folder = self.nav.current_folder().to_string();
        let selected = self.nav.selected_path().map(String::from);
        change(&mut self.nav);

        if self.nav.current_folder() != folder {
            self.listing = Loadable::Pending;
            self.listing_ticket = None;
            self.rename = RenameFlow::Idle;
        }
        if self.nav.selected_path() != selected.as_deref() {
            self.content = self.nav.selected_path().map(|_| Loadable::Pending);
            self.content_ticket = None;
            self.rename = RenameFlow::Idle;
        }
    }

    pub fn navigate_into(&mut self, folder_name: &str) {
        self.navigate(|nav| {
            nav.navigate_into(folder_name);
        });
    }

    pub fn navigate_up(&mut self) {
        self.navigate(|nav| {
            nav.navigate_up();
        });
    }

    pub fn navigate_to(&mut self, path: &str) {
        self.navigate(|nav| nav.navigate_to(path));
    }

    pub fn handle_gesture(&mut self, item: &DisplayItem, gesture: Gesture) -> SelectionOutcome {
        let mut outcome = SelectionOutcome::Deselected;
        self.navigate(|nav| outcome = handle_gesture(nav, item, gesture));
        outcome
    }

    pub fn select(&mut self, path: &str) {
        self.navigate(|nav| nav.select(path));
    }

    pub fn clear_selection(&mut self) {
        self.navigate(|nav| nav.clear_selection());
    }

    pub fn hide_details(&mut self) {
        self.rename.cancel();
        self.nav.hide_details();
    }

    // =========================================================================
    // Fetch Tickets
    // =========================================================================

    /// Issue a listing request for the current folder.
    pub fn begin_listing(&mut self) -> Ticket {
        let ticket = self.next_ticket(&self.nav.current_folder().to_string());
        self.listing = Loadable::Pending;
        self.listing_ticket = Some(ticket.clone());
        ticket
    }

    /// Apply a listing response. Returns `false` if the response is stale.
    pub fn apply_listing(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<FolderEntry>, ClientError>,
    ) -> bool {
        if self.listing_ticket.as_ref() != Some(ticket) || ticket.key != self.nav.current_folder() {
            return false;
        }
        self.listing = result.into();
        self.listing_ticket = None;
        true
    }

    /// Issue a content request for the selected path, if any.
    pub fn begin_content(&mut self) -> Option<Ticket> {
        let Some(path) = self.nav.selected_path().map(String::from) else {
            self.content = None;
            self.content_ticket = None;
            return None;
        };
        let ticket = self.next_ticket(&path);
        self.content = Some(Loadable::Pending);
        self.content_ticket = Some(ticket.clone());
        Some(ticket)
    }

    /// Apply a content response. Returns `false` if the response is stale.
    pub fn apply_content(
        &mut self,
        ticket: &Ticket,
        result: Result<FileContent, ClientError>,
    ) -> bool {
        if self.content_ticket.as_ref() != Some(ticket)
            || self.nav.selected_path() != Some(ticket.key.as_str())
        {
            return false;
        }
        self.content = Some(result.into());
        self.content_ticket = None;
        true
    }

    // =========================================================================
    // Rename
    // =========================================================================

    /// Start renaming the selected path. Returns `false` without a selection.
    pub fn start_rename(&mut self) -> bool {
        match self.nav.selected_path().map(String::from) {
            Some(path) => {
                self.rename.start(&path);
                true
            }
            None => false,
        }
    }

    pub fn edit_rename_segment(&mut self, index: usize, value: &str) {
        self.rename.edit_segment(index, value);
    }

    pub fn cancel_rename(&mut self) {
        self.rename.cancel();
    }

    /// Submit the rename. `Ok(None)` means nothing needs to be sent.
    pub fn submit_rename(&mut self) -> Result<Option<RenameRequest>, ValidationError> {
        match self.rename.submit()? {
            SubmitOutcome::Unchanged => Ok(None),
            SubmitOutcome::Request(request) => Ok(Some(request)),
        }
    }

    /// Settle a rename. Returns `true` when the move landed and the listing
    /// must be refreshed.
    ///
    /// The new path becomes the selection only if the edit was still
    /// committing; navigating away in the meantime keeps the user's choice.
    pub fn finish_rename<E: std::fmt::Display>(&mut self, result: Result<String, E>) -> bool {
        let landed = result.is_ok();
        if let Some(new_path) = self.rename.finish(result) {
            self.navigate(|nav| nav.select(new_path));
        }
        landed
    }
}

// =============================================================================
// Fetching
// =============================================================================

/// Fetch the listing a ticket was issued for.
pub async fn fetch_listing<C>(client: &C, ticket: &Ticket) -> Result<Vec<FolderEntry>, ClientError>
where
    C: ArtifactClient + ?Sized,
{
    client.list_folder(ticket.key()).await
}

/// Fetch bytes and metadata of the path a ticket was issued for.
pub async fn fetch_content<C>(client: &C, ticket: &Ticket) -> Result<FileContent, ClientError>
where
    C: ArtifactClient + ?Sized,
{
    let bytes = client.read_file_bytes(ticket.key()).await?;
    let meta = client.read_file_meta(ticket.key()).await?;
    Ok(FileContent { bytes, meta })
}
