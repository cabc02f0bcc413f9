//! File browser UI components.
//!
//! Components:
//! - [`FilesView`] - Main view: header, banner, navigation, list and details
//! - [`FileList`] - Rows of the current folder
//! - [`DetailsPanel`] - Fields, rename editor and preview of the selection

mod branch_selector;
mod commit_banner;
mod details;
mod file_list;
mod header;
mod navigation;
mod preview;
mod view;

pub use details::DetailsPanel;
pub use file_list::FileList;
pub use view::FilesView;
