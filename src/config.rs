//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the explorer header.
pub const APP_TITLE: &str = "Files";

// =============================================================================
// Repository Conventions
// =============================================================================

/// Placeholder file that keeps otherwise-empty folders in the store.
///
/// Written when a folder is created and hidden from every listing.
pub const PLACEHOLDER_FILE: &str = ".gitkeep";

/// Number of commit id characters shown in the pinned-commit banner.
pub const SHORT_COMMIT_LEN: usize = 7;

/// Commit message for the upload action.
pub const UPLOAD_COMMIT_MESSAGE: &str = "Upload files";

// =============================================================================
// Preview Configuration
// =============================================================================

/// Extensions rendered as images in the preview panel.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "webp"];

/// Extensions rendered as markdown in the preview panel.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

// =============================================================================
// Host Integration
// =============================================================================

/// Global under which the host page may expose an artifact client object.
pub const HOST_CLIENT_GLOBAL: &str = "artifactClient";

/// `postMessage` type used to ask the host frame to switch targets.
pub const SELECTION_MESSAGE_TYPE: &str = "selection";

// =============================================================================
// Demo Repository
// =============================================================================

/// Demo repository configuration, used when no host client is present.
pub mod demo {
    /// Host scope identifier of the demo target.
    pub const DID: &str = "did:key:demo-host";
    /// Repository name.
    pub const REPO: &str = "mock";
    /// Branch checked out on load.
    pub const BRANCH: &str = "main";
    /// Seed files of the initial commit.
    pub const FILES: &[(&str, &str)] = &[
        ("readme.txt", "Hello Artifact"),
        ("folder/info.txt", "More info"),
        ("folder/subfolder/test.txt", "Test file"),
        ("folder/subfolder/test2.txt", "Test file 2"),
    ];
    /// Simulated latency per read in milliseconds (wasm32 only).
    pub const LATENCY_MS: u32 = 150;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Time a toast stays on screen, in milliseconds.
pub const TOAST_TIMEOUT_MS: u32 = 4000;

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
