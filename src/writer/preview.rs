//! Preview surface.
//!
//! Subscribes to a document's event stream and drives the embedded renderer
//! through its scripting bridge: a reload re-points the page at the new file
//! and refreshes it, a scroll mirrors the editor's offset into the page.
//! Text-side kinds belong to the editing surface and are ignored here.

use std::sync::Arc;

use crate::bus::{EventHandler, EventRouter, SubscriptionHandle};
use crate::core::DocumentId;
use crate::event::{DocumentEvent, EventKind, Payload};

use super::bridge::RenderBridge;

struct PreviewHandler {
    bridge: Arc<dyn RenderBridge>,
}

impl EventHandler for PreviewHandler {
    fn name(&self) -> &str {
        "preview"
    }

    fn on_event(&self, event: &DocumentEvent) -> anyhow::Result<()> {
        match (event.kind(), event.payload()) {
            (EventKind::ReloadPage, Payload::FileLocation(path)) => {
                crate::debug!("writer"; "reloading preview from {}", path.display());
                self.bridge.load_document(path)?;
                self.bridge.eval("refreshPreview();")
            }
            (EventKind::ScrollPage, Payload::Offset(offset)) => {
                self.bridge.eval(&format!("scrollPosition({offset});"))
            }
            _ => Ok(()),
        }
    }
}

/// A live preview attached to one document.
///
/// Detaches automatically when dropped; after that the bridge receives no
/// further calls for this subscription.
pub struct PreviewSurface {
    handle: SubscriptionHandle,
}

impl PreviewSurface {
    /// Attach a preview to `document`, driving `bridge` on reload and scroll.
    ///
    /// Multiple previews may attach to the same document; each one observes
    /// the full edit stream independently.
    pub fn attach(
        router: &EventRouter,
        document: DocumentId,
        bridge: Arc<dyn RenderBridge>,
    ) -> Self {
        let handle = router.subscribe(document, Arc::new(PreviewHandler { bridge }));
        Self { handle }
    }

    /// The document this preview follows.
    pub fn document(&self) -> DocumentId {
        self.handle.document()
    }

    /// Detach explicitly. Idempotent; dropping the surface does the same.
    pub fn detach(&self) {
        self.handle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use parking_lot::Mutex;

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

    #[test]
    fn test_reload_loads_file_then_refreshes() {
        let router = EventRouter::new();
        let doc = DocumentId::new();
        let bridge = Arc::new(RecordingBridge::default());
        let _preview = PreviewSurface::attach(&router, doc, bridge.clone());

        router.publish(&DocumentEvent::reload_page(doc, "/drafts/a/preview.html"));

        assert_eq!(
            bridge.calls.lock().as_slice(),
            ["load:/drafts/a/preview.html", "eval:refreshPreview();"]
        );
    }

    #[test]
    fn test_scroll_evaluates_offset_script() {
        let router = EventRouter::new();
        let doc = DocumentId::new();
        let bridge = Arc::new(RecordingBridge::default());
        let _preview = PreviewSurface::attach(&router, doc, bridge.clone());

        router.publish(&DocumentEvent::scroll_page(doc, 133.5));

        assert_eq!(
            bridge.calls.lock().as_slice(),
            ["eval:scrollPosition(133.5);"]
        );
    }

    #[test]
    fn test_text_events_are_ignored() {
        let router = EventRouter::new();
        let doc = DocumentId::new();
        let bridge = Arc::new(RecordingBridge::default());
        let _preview = PreviewSurface::attach(&router, doc, bridge.clone());

        router.publish(&DocumentEvent::insert_text(doc, "![pic.png](pic.png)"));
        router.publish(&DocumentEvent::remove_text(doc, "![pic.png](pic.png)"));
        router.publish(&DocumentEvent::rerender_page(doc, ""));

        assert!(bridge.calls.lock().is_empty());
    }

    #[test]
    fn test_detach_stops_bridge_calls() {
        let router = EventRouter::new();
        let doc = DocumentId::new();
        let bridge = Arc::new(RecordingBridge::default());
        let preview = PreviewSurface::attach(&router, doc, bridge.clone());

        preview.detach();
        preview.detach(); // idempotent

        router.publish(&DocumentEvent::scroll_page(doc, 1.0));
        assert!(bridge.calls.lock().is_empty());
    }
}
