//! Writer-pane surfaces built on the event router.
//!
//! The editing surface and the preview surface never reference each other;
//! each attaches to the router under the document's identifier and reacts to
//! its side of the event stream. External collaborators (the embedded
//! renderer, the draft store, the markdown renderer) stay behind traits
//! injected at construction.

mod attachment;
mod bridge;
mod editor;
mod preview;

pub use attachment::AttachmentManager;
pub use bridge::{DraftStore, RenderBridge, Renderer};
pub use editor::EditorSurface;
pub use preview::PreviewSurface;

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    use parking_lot::Mutex;

    use crate::bus::EventRouter;
    use crate::core::DocumentId;
    use crate::event::DocumentEvent;

    /// Bridge that records every call instead of driving a real renderer.
    #[derive(Default)]
    struct RecordingBridge {
        calls: Mutex<Vec<String>>,
    }

    impl RenderBridge for RecordingBridge {
        fn load_document(&self, path: &Path) -> anyhow::Result<()> {
            self.calls.lock().push(format!("load:{}", path.display()));
            Ok(())
        }

        fn eval(&self, script: &str) -> anyhow::Result<()> {
            self.calls.lock().push(format!("eval:{script}"));
            Ok(())
        }
    }

    /// Renderer that returns a fixed preview path without touching disk.
    struct FixedRenderer {
        preview: PathBuf,
    }

    impl Renderer for FixedRenderer {
        fn render(&self, _document: DocumentId, _source: &str) -> anyhow::Result<PathBuf> {
            Ok(self.preview.clone())
        }
    }

    struct TempStore {
        article: Option<PathBuf>,
        draft: PathBuf,
    }

    impl DraftStore for TempStore {
        fn article_path(&self, _document: DocumentId) -> Option<PathBuf> {
            self.article.clone()
        }

        fn draft_path(&self, _document: DocumentId) -> PathBuf {
            self.draft.clone()
        }
    }

    #[test]
    fn test_attachment_roundtrip_updates_editor_and_preview() {
        let router = EventRouter::new();
        let doc = DocumentId::new();

        let draft_dir = tempfile::tempdir().unwrap();
        std::fs::write(draft_dir.path().join("pic.png"), b"png").unwrap();

        let bridge = Arc::new(RecordingBridge::default());
        let _preview = PreviewSurface::attach(&router, doc, bridge.clone());
        let editor = EditorSurface::open(
            &router,
            doc,
            "# Draft\n",
            Arc::new(FixedRenderer {
                preview: draft_dir.path().join("preview.html"),
            }),
        );
        let attachments = AttachmentManager::new(
            router.clone(),
            Arc::new(TempStore {
                article: None,
                draft: draft_dir.path().to_path_buf(),
            }),
        );

        // Insert: the fragment lands in the editor's source buffer.
        attachments.insert(doc, "pic.png", true);
        assert!(editor.source().contains("![pic.png](pic.png)"));

        // Remove: the fragment is retracted, the file deleted, and the
        // rerender pushes a fresh preview file through to the bridge.
        attachments.remove(doc, "pic.png", true).unwrap();
        assert!(!editor.source().contains("pic.png"));
        assert!(!draft_dir.path().join("pic.png").exists());

        let calls = bridge.calls.lock();
        let expected_load = format!("load:{}", draft_dir.path().join("preview.html").display());
        assert!(calls.contains(&expected_load));
        assert!(calls.contains(&"eval:refreshPreview();".to_string()));
    }

    #[test]
    fn test_two_previews_observe_the_same_edit_stream() {
        let router = EventRouter::new();
        let doc = DocumentId::new();

        let live = Arc::new(RecordingBridge::default());
        let export = Arc::new(RecordingBridge::default());
        let _p1 = PreviewSurface::attach(&router, doc, live.clone());
        let _p2 = PreviewSurface::attach(&router, doc, export.clone());

        router.publish(&DocumentEvent::scroll_page(doc, 42.0));

        assert_eq!(live.calls.lock().as_slice(), ["eval:scrollPosition(42);"]);
        assert_eq!(export.calls.lock().as_slice(), ["eval:scrollPosition(42);"]);
    }
}
