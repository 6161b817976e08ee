//! Event kinds exchanged across the editing/preview boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::payload::PayloadKind;

/// Closed set of event kinds understood by the writer surfaces.
///
/// Each kind fixes the payload variant it carries (see
/// [`expected_payload`](EventKind::expected_payload)); a mismatched pairing
/// is rejected when the event is constructed. Adding a kind is a versioned
/// extension point, not an ad hoc one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Append a text fragment to the source buffer.
    InsertText,
    /// Delete a text fragment from the source buffer.
    RemoveText,
    /// Re-point the preview at a freshly rendered file.
    ReloadPage,
    /// Scroll the preview to a vertical offset.
    ScrollPage,
    /// Re-render the document from its current source.
    RerenderPage,
}

impl EventKind {
    /// The payload variant this kind carries.
    pub fn expected_payload(self) -> PayloadKind {
        match self {
            Self::InsertText | Self::RemoveText | Self::RerenderPage => PayloadKind::Text,
            Self::ReloadPage => PayloadKind::FileLocation,
            Self::ScrollPage => PayloadKind::Offset,
        }
    }

    /// Stable wire name (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            Self::InsertText => "insert_text",
            Self::RemoveText => "remove_text",
            Self::ReloadPage => "reload_page",
            Self::ScrollPage => "scroll_page",
            Self::RerenderPage => "rerender_page",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
