//! Details panel derivation: display fields and preview selection.

use crate::config::{IMAGE_EXTENSIONS, MARKDOWN_EXTENSIONS};
use crate::models::{FileMeta, RepoScope};
use crate::utils::format::{extension, file_name, format_size};
use crate::utils::markdown_to_html;

/// How a file's content is previewed, decided by its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Markdown,
    Text,
}

impl PreviewKind {
    /// Detect preview kind from path extension (case-insensitive).
    pub fn from_path(path: &str) -> Self {
        match extension(path) {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => Self::Image,
            Some(ext) if MARKDOWN_EXTENSIONS.contains(&ext.as_str()) => Self::Markdown,
            _ => Self::Text,
        }
    }
}

/// MIME type for an image path, used to build the preview blob.
pub fn image_mime(path: &str) -> &'static str {
    match extension(path).as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Rendered preview content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preview {
    /// No bytes available yet
    Unavailable,
    /// Binary image, rendered through an object URL
    Image { mime: &'static str, bytes: Vec<u8> },
    /// Sanitized HTML from markdown
    Markdown(String),
    /// Literal text, shown preformatted
    Text(String),
}

impl Preview {
    /// Build the preview for `path` from its bytes.
    pub fn build(path: &str, bytes: Option<&[u8]>) -> Self {
        let Some(bytes) = bytes else {
            return Self::Unavailable;
        };
        match PreviewKind::from_path(path) {
            PreviewKind::Image => Self::Image {
                mime: image_mime(path),
                bytes: bytes.to_vec(),
            },
            PreviewKind::Markdown => {
                Self::Markdown(markdown_to_html(&String::from_utf8_lossy(bytes)))
            }
            PreviewKind::Text => Self::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

/// Type label for the details panel.
pub fn type_label(meta: Option<&FileMeta>) -> &'static str {
    match meta {
        Some(meta) if meta.kind.is_folder() => "folder",
        _ => "file",
    }
}

/// Display fields of the details panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDetails {
    pub name: String,
    pub path: String,
    pub type_label: &'static str,
    pub size: String,
    pub modified: String,
    pub repository: String,
    pub branch: String,
}

impl FileDetails {
    pub fn derive(
        path: &str,
        bytes: Option<&[u8]>,
        meta: Option<&FileMeta>,
        scope: &RepoScope,
    ) -> Self {
        Self {
            name: file_name(path).to_string(),
            path: path.to_string(),
            type_label: type_label(meta),
            size: format_size(bytes.map(|b| b.len() as u64)),
            // the client does not expose modification times
            modified: "-".to_string(),
            repository: scope.repo.clone(),
            branch: scope.branch.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    #[test]
    fn test_preview_kind() {
        assert_eq!(PreviewKind::from_path("logo.PNG"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_path("a/b/photo.jpeg"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_path("icon.svg"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_path("README.md"), PreviewKind::Markdown);
        assert_eq!(PreviewKind::from_path("notes.Markdown"), PreviewKind::Markdown);
        assert_eq!(PreviewKind::from_path("main.rs"), PreviewKind::Text);
        assert_eq!(PreviewKind::from_path("LICENSE"), PreviewKind::Text);
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime("a.jpg"), "image/jpeg");
        assert_eq!(image_mime("a.svg"), "image/svg+xml");
        assert_eq!(image_mime("a.bin"), "application/octet-stream");
    }

    #[test]
    fn test_preview_build() {
        assert_eq!(Preview::build("a.txt", None), Preview::Unavailable);
        assert_eq!(
            Preview::build("a.txt", Some(b"<b>raw</b>".as_slice())),
            Preview::Text("<b>raw</b>".into())
        );
        match Preview::build("doc.md", Some(b"# Hi".as_slice())) {
            Preview::Markdown(html) => assert!(html.contains("<h1>Hi</h1>")),
            other => panic!("expected markdown, got {:?}", other),
        }
        assert_eq!(
            Preview::build("pic.gif", Some([1u8, 2, 3].as_slice())),
            Preview::Image {
                mime: "image/gif",
                bytes: vec![1, 2, 3]
            }
        );
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        assert_eq!(
            Preview::build("a.txt", Some([b'o', b'k', 0xff].as_slice())),
            Preview::Text("ok\u{fffd}".into())
        );
    }

    #[test]
    fn test_type_label() {
        let folder = FileMeta {
            kind: EntryKind::Folder,
        };
        let file = FileMeta {
            kind: EntryKind::File,
        };
        assert_eq!(type_label(Some(&folder)), "folder");
        assert_eq!(type_label(Some(&file)), "file");
        assert_eq!(type_label(None), "file");
    }

    #[test]
    fn test_file_details() {
        let scope = RepoScope {
            repo: "mock".into(),
            branch: "main".into(),
        };
        let details = FileDetails::derive("folder/info.txt", Some([0u8; 2048].as_slice()), None, &scope);
        assert_eq!(details.name, "info.txt");
        assert_eq!(details.size, "2.0 KB");
        assert_eq!(details.type_label, "file");
        assert_eq!(details.modified, "-");
        assert_eq!(details.repository, "mock");

        let empty = FileDetails::derive("x", None, None, &scope);
        assert_eq!(empty.size, "-");
    }
}
