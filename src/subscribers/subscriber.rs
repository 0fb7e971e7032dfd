//! # Subscriber trait for consuming progress events.
//!
//! Implement [`Subscribe`] to observe the race: logging, live scoreboards,
//! statistics collection. Subscribers are fanned out to by
//! [`SubscriberSet`](crate::SubscriberSet) through bounded queues, so a
//! slow subscriber can never stall a worker — it only loses events.

use async_trait::async_trait;

use crate::events::ProgressEvent;

/// # Consumer of worker progress events.
///
/// Handlers run on a dedicated fan-out worker per subscriber; they may be
/// slow without affecting the race, at the cost of dropped events once
/// their queue fills up.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use monkeyrace::{ProgressEvent, ProgressKind, Subscribe};
///
/// struct WinAnnouncer;
///
/// #[async_trait]
/// impl Subscribe for WinAnnouncer {
///     fn name(&self) -> &'static str { "win-announcer" }
///
///     async fn on_event(&self, ev: &ProgressEvent) {
///         if ev.kind == ProgressKind::Won {
///             println!("worker {} wins after {} presses", ev.worker, ev.presses);
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Stable subscriber name, used in drop/panic diagnostics.
    fn name(&self) -> &'static str;

    /// Capacity of this subscriber's event queue.
    ///
    /// When the queue is full, further events are dropped for this
    /// subscriber (never buffered unboundedly, never blocking workers).
    fn queue_capacity(&self) -> usize {
        256
    }

    /// Handles one progress event.
    async fn on_event(&self, ev: &ProgressEvent);
}
