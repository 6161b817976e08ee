//! Collaborator seams for the writer surfaces.
//!
//! The router never touches the renderer or the filesystem directly; the
//! embedding application injects these at surface construction.

use std::path::{Path, PathBuf};

use crate::core::DocumentId;

/// Scripting bridge into the embedded HTML renderer.
pub trait RenderBridge: Send + Sync {
    /// Point the renderer at a file on disk.
    fn load_document(&self, path: &Path) -> anyhow::Result<()>;

    /// Evaluate a script inside the rendered page.
    fn eval(&self, script: &str) -> anyhow::Result<()>;
}

/// Resolves a document to its on-disk locations.
pub trait DraftStore: Send + Sync {
    /// Published article directory, when the document belongs to a local site.
    fn article_path(&self, document: DocumentId) -> Option<PathBuf>;

    /// Draft directory; always present once a document is open.
    fn draft_path(&self, document: DocumentId) -> PathBuf;
}

/// Renders markdown source to a preview file.
pub trait Renderer: Send + Sync {
    /// Render `source` and return the location of the preview file.
    fn render(&self, document: DocumentId, source: &str) -> anyhow::Result<PathBuf>;
}
