//! Document Event envelope.
//!
//! An event is an immutable `(document, kind, payload)` triple. The
//! kind/payload pairing is enforced at construction and on deserialization,
//! so a mismatched event is unrepresentable and can never be published.
//!
//! The JSON form is flat:
//!
//! ```json
//! {"document":"<uuid>","kind":"insert_text","payload":{"text":"![pic.png](pic.png)"}}
//! ```

mod error;
mod kind;
mod payload;

pub use error::EventError;
pub use kind::EventKind;
pub use payload::{Payload, PayloadKind};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::DocumentId;

/// An immutable event scoped to a single document.
///
/// Fields are private so the kind/payload invariant holds for every live
/// value; use [`DocumentEvent::new`] or the per-kind constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawEvent", try_from = "RawEvent")]
pub struct DocumentEvent {
    document: DocumentId,
    kind: EventKind,
    payload: Payload,
}

impl DocumentEvent {
    /// Assemble an event, validating the kind/payload pairing.
    pub fn new(
        document: DocumentId,
        kind: EventKind,
        payload: Payload,
    ) -> Result<Self, EventError> {
        let expected = kind.expected_payload();
        let got = payload.kind();
        if expected != got {
            return Err(EventError::PayloadMismatch {
                kind,
                expected,
                got,
            });
        }
        Ok(Self {
            document,
            kind,
            payload,
        })
    }

    /// Append `text` to the document's source buffer.
    pub fn insert_text(document: DocumentId, text: impl Into<String>) -> Self {
        Self {
            document,
            kind: EventKind::InsertText,
            payload: Payload::Text(text.into()),
        }
    }

    /// Delete `text` from the document's source buffer.
    pub fn remove_text(document: DocumentId, text: impl Into<String>) -> Self {
        Self {
            document,
            kind: EventKind::RemoveText,
            payload: Payload::Text(text.into()),
        }
    }

    /// Re-point the preview at `path`.
    pub fn reload_page(document: DocumentId, path: impl Into<PathBuf>) -> Self {
        Self {
            document,
            kind: EventKind::ReloadPage,
            payload: Payload::FileLocation(path.into()),
        }
    }

    /// Scroll the preview to `offset`.
    pub fn scroll_page(document: DocumentId, offset: f64) -> Self {
        Self {
            document,
            kind: EventKind::ScrollPage,
            payload: Payload::Offset(offset),
        }
    }

    /// Re-render the document; `text` is the fragment that triggered it.
    pub fn rerender_page(document: DocumentId, text: impl Into<String>) -> Self {
        Self {
            document,
            kind: EventKind::RerenderPage,
            payload: Payload::Text(text.into()),
        }
    }

    /// The document this event is scoped to.
    #[inline]
    pub fn document(&self) -> DocumentId {
        self.document
    }

    /// The event kind.
    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The payload; its variant always matches [`kind`](Self::kind).
    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Serialize to JSON. Infallible for these payload types.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse from JSON; `None` on malformed input or kind/payload mismatch.
    pub fn from_json(s: &str) -> Option<Self> {
        serde_json::from_str(s).ok()
    }
}

/// Unvalidated mirror of [`DocumentEvent`] used as the serde boundary.
#[derive(Serialize, Deserialize)]
struct RawEvent {
    document: DocumentId,
    kind: EventKind,
    payload: Payload,
}

impl From<DocumentEvent> for RawEvent {
    fn from(event: DocumentEvent) -> Self {
        Self {
            document: event.document,
            kind: event.kind,
            payload: event.payload,
        }
    }
}

impl TryFrom<RawEvent> for DocumentEvent {
    type Error = EventError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Self::new(raw.document, raw.kind, raw.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_pair_kind_and_payload() {
        let doc = DocumentId::new();

        let insert = DocumentEvent::insert_text(doc, "![pic.png](pic.png)");
        assert_eq!(insert.kind(), EventKind::InsertText);
        assert_eq!(insert.payload().as_text(), Some("![pic.png](pic.png)"));
        assert_eq!(insert.document(), doc);

        let reload = DocumentEvent::reload_page(doc, "/drafts/a/preview.html");
        assert_eq!(reload.kind(), EventKind::ReloadPage);
        assert!(reload.payload().as_file_location().is_some());

        let scroll = DocumentEvent::scroll_page(doc, 320.5);
        assert_eq!(scroll.payload().as_offset(), Some(320.5));
    }

    #[test]
    fn test_mismatched_payload_fails_construction() {
        let doc = DocumentId::new();
        let err = DocumentEvent::new(doc, EventKind::ScrollPage, Payload::Text("oops".into()))
            .unwrap_err();
        assert_eq!(
            err,
            EventError::PayloadMismatch {
                kind: EventKind::ScrollPage,
                expected: PayloadKind::Offset,
                got: PayloadKind::Text,
            }
        );
    }

    #[test]
    fn test_new_accepts_matching_payload() {
        let doc = DocumentId::new();
        let event =
            DocumentEvent::new(doc, EventKind::RemoveText, Payload::Text("[a.pdf](a.pdf)".into()))
                .unwrap();
        assert_eq!(event.kind(), EventKind::RemoveText);
    }

    #[test]
    fn test_json_roundtrip() {
        let doc = DocumentId::new();
        let event = DocumentEvent::insert_text(doc, "![pic.png](pic.png)");

        let json = event.to_json();
        assert!(json.contains("\"kind\":\"insert_text\""));

        let parsed = DocumentEvent::from_json(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_mismatched_json_rejected() {
        let doc = DocumentId::new();
        // Hand-built JSON pairing scroll_page with a text payload
        let json = format!(
            r#"{{"document":"{doc}","kind":"scroll_page","payload":{{"text":"oops"}}}}"#
        );
        assert!(DocumentEvent::from_json(&json).is_none());
    }
}
