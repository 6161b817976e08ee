//! Core types - pure abstractions shared across the codebase.

mod fragment;
mod id;

pub use fragment::{insertion_fragment, removal_fragment};
pub use id::DocumentId;
