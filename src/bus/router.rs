//! Identifier-scoped event bus.
//!
//! Delivers document-scoped events from any producer to all current
//! subscribers of that document, synchronously, in subscription order, with
//! no cross-document leakage. The router never buffers or replays: a
//! subscriber that attaches after a publish does not see it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::DocumentId;
use crate::event::DocumentEvent;

use super::handle::SubscriptionHandle;

// =============================================================================
// Handler
// =============================================================================

/// A subscriber capable of receiving document events.
pub trait EventHandler: Send + Sync {
    /// Short name used in delivery logs.
    fn name(&self) -> &str {
        "handler"
    }

    /// Process one event.
    ///
    /// An `Err` is logged by the router and does not abort delivery to
    /// handlers subscribed after this one; it never reaches the publisher.
    fn on_event(&self, event: &DocumentEvent) -> anyhow::Result<()>;
}

/// Closure adapter for [`EventHandler`].
struct FnHandler<F> {
    f: F,
}

impl<F> EventHandler for FnHandler<F>
where
    F: Fn(&DocumentEvent) -> anyhow::Result<()> + Send + Sync,
{
    fn on_event(&self, event: &DocumentEvent) -> anyhow::Result<()> {
        (self.f)(event)
    }
}

// =============================================================================
// Registry
// =============================================================================

struct Entry {
    token: u64,
    handler: Arc<dyn EventHandler>,
}

/// Per-document subscriber lists, guarded by a single mutex.
pub(super) struct Registry {
    next_token: u64,
    subscriptions: HashMap<DocumentId, Vec<Entry>>,
}

impl Registry {
    fn new() -> Self {
        Self {
            next_token: 0,
            subscriptions: HashMap::new(),
        }
    }

    /// Remove the entry with `token` under `document`, if still present.
    pub(super) fn remove(&mut self, document: DocumentId, token: u64) {
        if let Some(entries) = self.subscriptions.get_mut(&document) {
            entries.retain(|entry| entry.token != token);
            if entries.is_empty() {
                self.subscriptions.remove(&document);
            }
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("documents", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Router
// =============================================================================

/// Process-local publish/subscribe scoped per document.
///
/// Cheap to clone; clones share one registry, so the editing surface and the
/// preview surface each hold their own copy without referencing each other.
#[derive(Clone)]
pub struct EventRouter {
    registry: Arc<Mutex<Registry>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    /// Register `handler` for events published under `document`.
    ///
    /// Always succeeds. Duplicate subscriptions of the same handler are
    /// permitted; each one is independently revocable through its own handle.
    pub fn subscribe(
        &self,
        document: DocumentId,
        handler: Arc<dyn EventHandler>,
    ) -> SubscriptionHandle {
        let mut registry = self.registry.lock();
        let token = registry.next_token;
        registry.next_token += 1;
        registry
            .subscriptions
            .entry(document)
            .or_default()
            .push(Entry { token, handler });
        SubscriptionHandle::new(Arc::downgrade(&self.registry), document, token)
    }

    /// Register a closure for events published under `document`.
    pub fn subscribe_fn<F>(&self, document: DocumentId, f: F) -> SubscriptionHandle
    where
        F: Fn(&DocumentEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.subscribe(document, Arc::new(FnHandler { f }))
    }

    /// Revoke one subscription. No-op on an already-revoked or unknown handle.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) {
        handle.cancel();
    }

    /// Deliver `event` to every handler subscribed under its document, in
    /// subscription order. No subscribers: the event is silently dropped.
    ///
    /// The subscriber list is snapshotted before any handler runs, and
    /// handlers run outside the registry lock. A handler may therefore
    /// subscribe or unsubscribe during delivery without deadlocking; such
    /// edits take effect for later publishes, not the in-flight one.
    pub fn publish(&self, event: &DocumentEvent) {
        let snapshot: Vec<Arc<dyn EventHandler>> = {
            let registry = self.registry.lock();
            match registry.subscriptions.get(&event.document()) {
                Some(entries) => entries.iter().map(|e| e.handler.clone()).collect(),
                None => Vec::new(),
            }
        };

        if snapshot.is_empty() {
            crate::debug!("bus"; "no subscribers for {}, dropping {}", event.document(), event.kind());
            return;
        }

        for handler in &snapshot {
            if let Err(e) = handler.on_event(event) {
                crate::log!("bus"; "handler '{}' failed on {}: {e:#}", handler.name(), event.kind());
            }
        }
        crate::debug!("bus"; "delivered {} to {} subscribers", event.kind(), snapshot.len());
    }

    /// Drop every subscription for `document` (document closed). Idempotent.
    pub fn clear(&self, document: DocumentId) {
        self.registry.lock().subscriptions.remove(&document);
    }

    /// Number of live subscriptions under `document`.
    pub fn subscriber_count(&self, document: DocumentId) -> usize {
        self.registry
            .lock()
            .subscriptions
            .get(&document)
            .map_or(0, Vec::len)
    }

    /// Documents that currently have at least one subscriber.
    pub fn active_documents(&self) -> Vec<DocumentId> {
        self.registry.lock().subscriptions.keys().copied().collect()
    }
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
