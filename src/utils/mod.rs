//! Utility modules for formatting, collation, logging and browser APIs.
//!
//! Provides:
//! - [`format`] - Sizes and path helpers
//! - [`locale_compare`] - Accent-aware name ordering
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`ObjectUrl`] - Blob URLs revoked on drop

pub mod collate;
pub mod console;
pub mod dom;
pub mod format;
mod markdown;
mod object_url;

pub use collate::locale_compare;
pub use markdown::markdown_to_html;
pub use object_url::ObjectUrl;
