//! # Progress events emitted by race workers.
//!
//! [`ProgressKind`] classifies what a worker is reporting:
//! - **Checkpoint**: periodic heartbeat every N key presses
//! - **NewBest**: the attempt buffer beat the previous best before a reset
//! - **Won** / **Conceded**: terminal outcomes
//!
//! The [`ProgressEvent`] struct carries the worker id, press counter, best
//! length, and (for `Won`/`NewBest`) the matched text itself.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events from
//! different workers interleave.
//!
//! ## Example
//! ```rust
//! use monkeyrace::{ProgressEvent, ProgressKind};
//!
//! let ev = ProgressEvent::new(ProgressKind::NewBest, 3)
//!     .with_presses(120)
//!     .with_best_len(4)
//!     .with_target_len(19)
//!     .with_text("itwa");
//!
//! assert_eq!(ev.kind, ProgressKind::NewBest);
//! assert_eq!(ev.worker, 3);
//! assert_eq!(ev.text.as_deref(), Some("itwa"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of worker progress events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressKind {
    /// Periodic heartbeat, emitted every checkpoint interval of key
    /// presses regardless of match/mismatch outcome.
    ///
    /// Sets:
    /// - `worker`, `presses`, `best_len`, `target_len`
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Checkpoint,

    /// The attempt buffer strictly exceeded the previous best just before
    /// a mismatch reset.
    ///
    /// Sets:
    /// - `worker`, `presses`, `best_len`, `target_len`
    /// - `text`: the new best attempt string
    NewBest,

    /// This worker reproduced the full target and claimed the win.
    ///
    /// Sets:
    /// - `worker`, `presses` (total), `target_len`
    /// - `best_len`: best attempt recorded **before** winning
    /// - `text`: the final attempt (equals the target)
    Won,

    /// Another worker won first; this worker stopped.
    ///
    /// Sets:
    /// - `worker`, `presses`, `best_len`, `target_len`
    Conceded,
}

/// Worker progress event with metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other fields are set depending on the [`ProgressKind`]
#[derive(Clone, Debug)]
pub struct ProgressEvent {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Id of the emitting worker (1-based).
    pub worker: u32,
    /// Event classification.
    pub kind: ProgressKind,
    /// Length of the best attempt so far.
    pub best_len: usize,
    /// Length of the race target.
    pub target_len: usize,
    /// Total key presses by this worker so far.
    pub presses: u64,
    /// Matched text, present for `Won` and `NewBest`.
    pub text: Option<Arc<str>>,
}

impl ProgressEvent {
    /// Creates a new event of the given kind for `worker`, stamped with
    /// the current time and the next global sequence number.
    pub fn new(kind: ProgressKind, worker: u32) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            worker,
            kind,
            best_len: 0,
            target_len: 0,
            presses: 0,
            text: None,
        }
    }

    /// Attaches the key-press counter.
    #[inline]
    pub fn with_presses(mut self, presses: u64) -> Self {
        self.presses = presses;
        self
    }

    /// Attaches the best-attempt length.
    #[inline]
    pub fn with_best_len(mut self, len: usize) -> Self {
        self.best_len = len;
        self
    }

    /// Attaches the target length.
    #[inline]
    pub fn with_target_len(mut self, len: usize) -> Self {
        self.target_len = len;
        self
    }

    /// Attaches matched text (best attempt or final string).
    #[inline]
    pub fn with_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// True for terminal events (`Won` or `Conceded`).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, ProgressKind::Won | ProgressKind::Conceded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase() {
        let a = ProgressEvent::new(ProgressKind::Checkpoint, 1);
        let b = ProgressEvent::new(ProgressKind::Checkpoint, 1);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn builders_set_fields() {
        let ev = ProgressEvent::new(ProgressKind::Won, 2)
            .with_presses(17)
            .with_best_len(1)
            .with_target_len(2)
            .with_text("ab");
        assert_eq!(ev.worker, 2);
        assert_eq!(ev.presses, 17);
        assert_eq!(ev.best_len, 1);
        assert_eq!(ev.target_len, 2);
        assert_eq!(ev.text.as_deref(), Some("ab"));
        assert!(ev.is_terminal());
    }

    #[test]
    fn checkpoint_is_not_terminal() {
        assert!(!ProgressEvent::new(ProgressKind::Checkpoint, 1).is_terminal());
        assert!(!ProgressEvent::new(ProgressKind::NewBest, 1).is_terminal());
        assert!(ProgressEvent::new(ProgressKind::Conceded, 1).is_terminal());
    }
}
