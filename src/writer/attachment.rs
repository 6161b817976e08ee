//! Attachment flow.
//!
//! Inserting an attachment publishes its markdown fragment as an insert
//! event; removing it deletes the file, publishes the matching remove event
//! and then a rerender so the preview catches up. Attachment files resolve
//! against the published article directory first, then the draft directory.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::bus::EventRouter;
use crate::core::{DocumentId, insertion_fragment, removal_fragment};
use crate::event::DocumentEvent;

use super::bridge::DraftStore;

/// Publishes attachment insert/remove event sequences for the writer.
pub struct AttachmentManager {
    router: EventRouter,
    store: Arc<dyn DraftStore>,
}

impl AttachmentManager {
    pub fn new(router: EventRouter, store: Arc<dyn DraftStore>) -> Self {
        Self { router, store }
    }

    /// Locate `filename` on disk: article directory first, then draft.
    pub fn resolve(&self, document: DocumentId, filename: &str) -> Option<PathBuf> {
        if let Some(dir) = self.store.article_path(document) {
            let path = dir.join(filename);
            if path.exists() {
                return Some(path);
            }
        }
        let path = self.store.draft_path(document).join(filename);
        path.exists().then_some(path)
    }

    /// Insert a reference to an uploaded file into the document's source.
    ///
    /// No-op when the file is not on disk for this document.
    pub fn insert(&self, document: DocumentId, filename: &str, is_image: bool) {
        if self.resolve(document, filename).is_none() {
            crate::log!("writer"; "insert: {filename} not found for {document}");
            return;
        }
        let fragment = insertion_fragment(filename, is_image);
        self.router
            .publish(&DocumentEvent::insert_text(document, fragment));
    }

    /// Remove an uploaded file and retract its reference from the source.
    ///
    /// Files living outside the draft directory are copied there first, so
    /// an abandoned edit can still recover the upload. Publishes a remove
    /// event followed by a rerender.
    pub fn remove(
        &self,
        document: DocumentId,
        filename: &str,
        is_image: bool,
    ) -> anyhow::Result<()> {
        let Some(path) = self.resolve(document, filename) else {
            crate::debug!("writer"; "remove: {filename} not on disk for {document}");
            return Ok(());
        };

        let draft_dir = self.store.draft_path(document);
        if path.parent() != Some(draft_dir.as_path()) {
            fs::create_dir_all(&draft_dir)?;
            fs::copy(&path, draft_dir.join(filename))?;
        }
        fs::remove_file(&path)?;

        let fragment = removal_fragment(filename, is_image);
        self.router
            .publish(&DocumentEvent::remove_text(document, fragment.clone()));
        self.router
            .publish(&DocumentEvent::rerender_page(document, fragment));
        Ok(())
    }
}
