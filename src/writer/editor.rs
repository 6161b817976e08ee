//! Editing surface.
//!
//! Owns the markdown source buffer for one document and answers the text
//! side of the event stream: insert appends the fragment, remove deletes its
//! first occurrence, rerender pushes a freshly rendered preview file back
//! through the router as a reload. Reload and scroll are the preview's side
//! and are ignored here.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::bus::{EventHandler, EventRouter, SubscriptionHandle};
use crate::core::DocumentId;
use crate::event::{DocumentEvent, EventKind, Payload};

use super::bridge::Renderer;

struct EditorHandler {
    document: DocumentId,
    buffer: Arc<Mutex<String>>,
    renderer: Arc<dyn Renderer>,
    router: EventRouter,
}

impl EventHandler for EditorHandler {
    fn name(&self) -> &str {
        "editor"
    }

    fn on_event(&self, event: &DocumentEvent) -> anyhow::Result<()> {
        match (event.kind(), event.payload()) {
            (EventKind::InsertText, Payload::Text(fragment)) => {
                self.buffer.lock().push_str(fragment);
                Ok(())
            }
            (EventKind::RemoveText, Payload::Text(fragment)) => {
                let mut buffer = self.buffer.lock();
                match buffer.find(fragment.as_str()) {
                    Some(pos) => buffer.replace_range(pos..pos + fragment.len(), ""),
                    // Best effort: a fragment the user already edited away
                    // is not an error.
                    None => {
                        crate::debug!("writer"; "remove: fragment not in buffer, ignoring");
                    }
                }
                Ok(())
            }
            (EventKind::RerenderPage, Payload::Text(_)) => {
                let source = self.buffer.lock().clone();
                let path = self.renderer.render(self.document, &source)?;
                self.router
                    .publish(&DocumentEvent::reload_page(self.document, path));
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// The editing side of a document, holding its markdown source.
pub struct EditorSurface {
    document: DocumentId,
    buffer: Arc<Mutex<String>>,
    handle: SubscriptionHandle,
}

impl EditorSurface {
    /// Open `document` with `source` as its initial markdown buffer.
    ///
    /// The surface subscribes itself to the router and stays subscribed
    /// until [`close`](Self::close) or drop.
    pub fn open(
        router: &EventRouter,
        document: DocumentId,
        source: impl Into<String>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let buffer = Arc::new(Mutex::new(source.into()));
        let handler = EditorHandler {
            document,
            buffer: buffer.clone(),
            renderer,
            router: router.clone(),
        };
        let handle = router.subscribe(document, Arc::new(handler));
        Self {
            document,
            buffer,
            handle,
        }
    }

    /// The document this surface edits.
    pub fn document(&self) -> DocumentId {
        self.document
    }

    /// Current markdown source.
    pub fn source(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Stop receiving events. Idempotent; dropping the surface does the same.
    pub fn close(&self) {
        self.handle.cancel();
    }
}
