//! Core logic of the file browser.
//!
//! This module provides:
//! - [`ArtifactClient`] and its [`MemoryClient`] / [`JsArtifactClient`] implementations
//! - [`FileBrowser`] state with stale-response tickets
//! - Listing, selection, details, rename and branch state machines
//! - [`actions`] commit workflows for create, upload and rename

pub mod actions;
pub mod branch;
mod browser;
mod client;
pub mod details;
pub mod error;
pub mod frame;
mod js_client;
pub mod listing;
mod memory;
pub mod rename;
pub mod selection;
#[cfg(test)]
mod testing;

pub use browser::{FileBrowser, FileContent, Ticket, fetch_content, fetch_listing};
pub use client::{ArtifactClient, ClientFuture};
pub use js_client::{JsArtifactClient, JsSdk};
pub use memory::MemoryClient;
