//! # Event bus for broadcasting worker progress.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that gives
//! workers a non-blocking way to report progress while the race runs.
//!
//! ## Architecture
//! ```text
//! Publishers (many):               Subscriber (one):
//!   Worker 1 ──┐
//!   Worker 2 ──┼────► Bus ───────► SubscriberSet::listen ──► fan-out
//!   Worker N ──┘ (broadcast chan)   (scoped to one race run)
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks or fails the caller;
//!   dropped events must never alter the race outcome.
//! - **Bounded capacity**: a single ring buffer stores recent events.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip
//!   the `n` oldest items.
//! - **No persistence**: events are lost if nobody is subscribed at send time.

use tokio::sync::broadcast;

use super::event::ProgressEvent;

/// Broadcast channel for worker progress events.
///
/// Thin wrapper over [`tokio::sync::broadcast`] providing a
/// `publish`/`subscribe` API. Multiple workers publish concurrently;
/// subscribers receive clones of each event.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately.
/// - **Fire-and-forget**: no delivery or durability guarantees.
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<ProgressEvent>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity.
    ///
    /// Capacity is shared across all receivers; the minimum is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<ProgressEvent>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active subscribers.
    ///
    /// If there are no receivers the event is dropped; the call still
    /// returns immediately. Workers rely on this being infallible.
    pub fn publish(&self, ev: ProgressEvent) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver observing subsequent events.
    ///
    /// Each call creates an independent receiver that only sees events
    /// sent after it subscribed. Slow receivers get `RecvError::Lagged(n)`.
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.tx.subscribe()
    }
}
