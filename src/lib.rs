//! draftlink - document-scoped event routing for live markdown preview.
//!
//! A writer pane and its embedded HTML preview never hold references to each
//! other. Both sides hold a clone of an [`EventRouter`] and exchange typed
//! [`DocumentEvent`]s keyed by an opaque [`DocumentId`]: the editing side
//! publishes text insertions, removals and rerender requests; the preview
//! side publishes nothing and reacts to reload and scroll events by driving
//! the renderer's scripting bridge.
//!
//! Delivery is synchronous, in subscription order, and strictly scoped to one
//! document - publishing under one identifier never reaches subscribers of
//! another. The router does not buffer: a subscriber that attaches after a
//! publish never sees it.
//!
//! # Example
//!
//! ```ignore
//! let router = EventRouter::new();
//! let doc = DocumentId::new();
//!
//! let _preview = PreviewSurface::attach(&router, doc, bridge);
//! let editor = EditorSurface::open(&router, doc, "# Draft\n", renderer);
//!
//! router.publish(&DocumentEvent::insert_text(doc, "![pic.png](pic.png)"));
//! assert!(editor.source().contains("pic.png"));
//! ```

pub mod bus;
pub mod core;
pub mod event;
pub mod logger;
pub mod writer;

pub use crate::bus::{EventHandler, EventRouter, SubscriptionHandle};
pub use crate::core::DocumentId;
pub use crate::event::{DocumentEvent, EventError, EventKind, Payload};
