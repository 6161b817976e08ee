//! Event payload variants.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Payload carried by a document event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// Literal markdown text fragment.
    Text(String),
    /// On-disk location of a rendered preview file.
    FileLocation(PathBuf),
    /// Vertical scroll offset in renderer units.
    Offset(f64),
}

impl Payload {
    /// Discriminant of this payload.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Text(_) => PayloadKind::Text,
            Self::FileLocation(_) => PayloadKind::FileLocation,
            Self::Offset(_) => PayloadKind::Offset,
        }
    }

    /// Text fragment, if this is a text payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// File location, if this is a file payload.
    pub fn as_file_location(&self) -> Option<&Path> {
        match self {
            Self::FileLocation(path) => Some(path),
            _ => None,
        }
    }

    /// Scroll offset, if this is an offset payload.
    pub fn as_offset(&self) -> Option<f64> {
        match self {
            Self::Offset(offset) => Some(*offset),
            _ => None,
        }
    }
}

/// Discriminant of [`Payload`], used for kind/payload validation and error
/// reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Text,
    FileLocation,
    Offset,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::FileLocation => "file_location",
            Self::Offset => "offset",
        })
    }
}
