//! Event construction errors.

use thiserror::Error;

use super::kind::EventKind;
use super::payload::PayloadKind;

/// Errors raised when assembling a [`DocumentEvent`](super::DocumentEvent).
///
/// Construction errors are reported to the producer synchronously; an event
/// that fails construction never reaches `publish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    /// The payload variant does not match what the kind carries.
    #[error("{kind} events carry a {expected} payload, got {got}")]
    PayloadMismatch {
        kind: EventKind,
        expected: PayloadKind,
        got: PayloadKind,
    },
}
