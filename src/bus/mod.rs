//! Document Event Router - per-document publish/subscribe.

mod handle;
mod router;

pub use handle::SubscriptionHandle;
pub use router::{EventHandler, EventRouter};
