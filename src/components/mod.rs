//! UI components built with Leptos.
//!
//! - [`files`] - File browser UI
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`toast`] - Transient error notifications

pub mod files;
pub mod icons;
pub mod toast;
