//! Subscription handles.

use std::sync::Weak;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::core::DocumentId;

use super::router::Registry;

/// Revocation handle for one subscription.
///
/// Dropping the handle cancels the subscription, so a surface that owns its
/// handle stops receiving events when it is torn down. The handle holds only
/// a weak reference to the registry; it never keeps the router alive.
#[derive(Debug)]
pub struct SubscriptionHandle {
    registry: Weak<Mutex<Registry>>,
    document: DocumentId,
    token: u64,
    cancelled: AtomicBool,
}

impl SubscriptionHandle {
    pub(super) fn new(registry: Weak<Mutex<Registry>>, document: DocumentId, token: u64) -> Self {
        Self {
            registry,
            document,
            token,
            cancelled: AtomicBool::new(false),
        }
    }

    /// The document this subscription listens on.
    pub fn document(&self) -> DocumentId {
        self.document
    }

    /// Revoke the subscription. Idempotent: cancelling an already-cancelled
    /// handle (or one whose entry was removed by `clear`) is a no-op.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().remove(self.document, self.token);
        }
    }

    /// Whether this handle has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
