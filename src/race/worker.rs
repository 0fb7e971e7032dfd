//! # Worker: the restart-on-mismatch matching state machine.
//!
//! One worker owns one independent attempt at reproducing the target. It
//! draws characters through its [`Keyboard`], compares them against the
//! target one position at a time, and throws the whole attempt away on any
//! wrong key — the typewriter must retype from the start.
//!
//! ## Per-iteration flow
//! ```text
//! loop {
//!   ├─► cancelled?            → concede
//!   ├─► signal has a winner?  → emit Conceded, stop
//!   ├─► strike key, presses += 1
//!   ├─► key == target[cursor]
//!   │     ├─ yes → append to attempt, advance cursor
//!   │     │        cursor == len? → try_claim
//!   │     │            ├─ claimed  → emit Won, stop
//!   │     │            └─ lost     → emit Conceded, stop
//!   │     └─ no  → attempt longer than best?
//!   │              ├─ yes → record best, emit NewBest
//!   │              └─ reset attempt, cursor = 0
//!   └─► every checkpoint_interval presses (while still running):
//!         emit Checkpoint, yield to the scheduler
//! }
//! ```
//!
//! ## Rules
//! - Per-worker state (attempt buffer, counters, best) is exclusively
//!   owned; the [`WinSignal`] is the only shared state the worker touches.
//! - Best attempt updates only on **strictly** greater length; ties keep
//!   the earlier best.
//! - Event emission is fire-and-forget; a full presentation channel never
//!   stalls the matching loop.
//! - An empty target is recognized before the loop: an immediate claim
//!   attempt with zero presses, never an infinite loop.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::alphabet::Alphabet;
use crate::events::{Bus, ProgressEvent, ProgressKind};
use crate::race::keys::Keyboard;
use crate::race::signal::WinSignal;

/// Lifecycle state of a worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerStatus {
    /// Still drawing keys.
    Running,
    /// Reproduced the full target and claimed the win.
    Won,
    /// Stopped because another worker won (or cancellation).
    Conceded,
}

/// Terminal report returned by [`Worker::run`].
#[derive(Clone, Debug)]
pub struct WorkerReport {
    /// Worker id (1-based).
    pub id: u32,
    /// Terminal state (`Won` or `Conceded`).
    pub status: WorkerStatus,
    /// Total key presses made.
    pub presses: u64,
    /// Length of the best attempt recorded before termination.
    ///
    /// For a winner this is the best **before** the winning attempt.
    pub best_len: usize,
    /// Press counter at the moment the best attempt was recorded.
    pub best_at: u64,
}

/// One independent matching attempt racing against the shared [`WinSignal`].
pub struct Worker {
    id: u32,
    target: Arc<[char]>,
    alphabet: Arc<Alphabet>,
    signal: Arc<WinSignal>,
    bus: Bus,
    keys: Box<dyn Keyboard>,
    checkpoint_interval: u64,

    status: WorkerStatus,
    attempt: String,
    cursor: usize,
    presses: u64,
    best: String,
    best_at: u64,
}

impl Worker {
    /// Creates a worker. `checkpoint_interval` must be at least 1
    /// (the coordinator clamps it).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        target: Arc<[char]>,
        alphabet: Arc<Alphabet>,
        signal: Arc<WinSignal>,
        bus: Bus,
        keys: Box<dyn Keyboard>,
        checkpoint_interval: u64,
    ) -> Self {
        Self {
            id,
            target,
            alphabet,
            signal,
            bus,
            keys,
            checkpoint_interval: checkpoint_interval.max(1),
            status: WorkerStatus::Running,
            attempt: String::new(),
            cursor: 0,
            presses: 0,
            best: String::new(),
            best_at: 0,
        }
    }

    /// Runs the matching loop to a terminal state.
    ///
    /// Returns the terminal report; progress along the way is published on
    /// the bus. Cancellation via `token` is checked alongside the win
    /// signal and leads to concession.
    pub async fn run(mut self, token: CancellationToken) -> WorkerReport {
        if self.target.is_empty() {
            // Degenerate input: nothing to type, first claim wins with
            // zero presses.
            self.finish_attempt();
            return self.report();
        }

        while self.status == WorkerStatus::Running {
            if token.is_cancelled() {
                self.concede();
                break;
            }
            if self.signal.winner().is_some() {
                self.concede();
                break;
            }

            let key = self.keys.strike(&self.alphabet);
            self.presses += 1;

            if key == self.target[self.cursor] {
                self.attempt.push(key);
                self.cursor += 1;
                if self.cursor == self.target.len() {
                    self.finish_attempt();
                }
            } else {
                self.record_best();
                self.attempt.clear();
                self.cursor = 0;
            }

            // Terminal events end the stream; no checkpoint after a win
            // that lands on the interval boundary.
            if self.status == WorkerStatus::Running
                && self.presses % self.checkpoint_interval == 0
            {
                self.bus.publish(
                    self.event(ProgressKind::Checkpoint)
                        .with_best_len(self.best.len()),
                );
                tokio::task::yield_now().await;
            }
        }

        self.report()
    }

    /// The attempt buffer equals the full target: race for the claim.
    fn finish_attempt(&mut self) {
        if self.signal.try_claim(self.id) {
            self.status = WorkerStatus::Won;
            let text: Arc<str> = std::mem::take(&mut self.attempt).into();
            self.bus.publish(
                self.event(ProgressKind::Won)
                    .with_best_len(self.best.len())
                    .with_text(text),
            );
        } else {
            // Photo finish lost: someone claimed between our last check
            // and now.
            self.concede();
        }
    }

    /// Records the current attempt as the new best if strictly longer.
    fn record_best(&mut self) {
        if self.attempt.len() > self.best.len() {
            self.best.clear();
            self.best.push_str(&self.attempt);
            self.best_at = self.presses;
            self.bus.publish(
                self.event(ProgressKind::NewBest)
                    .with_best_len(self.best.len())
                    .with_text(self.best.as_str()),
            );
        }
    }

    fn concede(&mut self) {
        self.status = WorkerStatus::Conceded;
        self.bus.publish(
            self.event(ProgressKind::Conceded)
                .with_best_len(self.best.len()),
        );
    }

    fn event(&self, kind: ProgressKind) -> ProgressEvent {
        ProgressEvent::new(kind, self.id)
            .with_presses(self.presses)
            .with_target_len(self.target.len())
    }

    fn report(&self) -> WorkerReport {
        WorkerReport {
            id: self.id,
            status: self.status,
            presses: self.presses,
            best_len: self.best.len(),
            best_at: self.best_at,
        }
    }
}
